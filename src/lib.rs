pub mod generator;
pub mod git;
pub mod kafka;
pub mod models;
pub mod mpv;
pub mod parser;
pub mod settings;
pub mod syslog;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{NumberOrString, Proxy, ProxyGroupConfig, ProxyGroupType, ProxyType};

// Re-export configuration types
pub use settings::Settings;
