use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::generator::config::formats::clash::CLASH_BASE_TEMPLATE;

fn default_probe_url() -> String {
    "http://www.gstatic.com/generate_204".to_string()
}

fn default_auto_interval() -> u32 {
    86400
}

fn default_fallback_interval() -> u32 {
    7200
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Deserialize(#[from] toml::de::Error),
}

/// Settings for `airport2clash`.
///
/// Loaded once at startup and handed to the generator by reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replacement for the built-in Clash template.
    pub template: Option<PathBuf>,
    pub groups: GroupSettings,
}

/// Health-check parameters of the generated probe groups.
///
/// Group names are fixed because the routing rules in the template refer to
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupSettings {
    #[serde(default = "default_probe_url")]
    pub probe_url: String,
    #[serde(default = "default_auto_interval")]
    pub auto_interval: u32,
    #[serde(default = "default_fallback_interval")]
    pub fallback_interval: u32,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            probe_url: default_probe_url(),
            auto_interval: default_auto_interval(),
            fallback_interval: default_fallback_interval(),
        }
    }
}

impl FromStr for Settings {
    type Err = SettingsError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(data)?)
    }
}

impl Settings {
    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        read_to_string(path.as_ref())?.parse()
    }

    /// Text of the Clash template: the configured file, or the built-in one.
    pub fn load_template(&self) -> Result<String, SettingsError> {
        match &self.template {
            Some(path) => read_to_string(path),
            None => Ok(CLASH_BASE_TEMPLATE.to_string()),
        }
    }
}

fn read_to_string(path: &Path) -> Result<String, SettingsError> {
    fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
