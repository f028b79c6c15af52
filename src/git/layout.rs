//! Where a clone lands on disk.
//!
//! Checkouts live under a source root as `<root>/<host>/<path segments>`, so
//! `git@github.com:owner/repo.git` ends up in `<root>/github.com/owner/repo`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::url::GitReference;

/// Environment variable overriding the source root
pub const SRC_ROOT_ENV: &str = "SRC_GIT_CLONE_ROOT";

/// Directory name that marks a source root, and the default root under `$HOME`
pub const SRC_DIR_NAME: &str = "src";

/// No source root could be resolved because the home directory is unknown.
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine source root: not inside a `src` directory and no home directory")]
pub struct NoSourceRoot;

/// Pick the directory clones are placed under.
///
/// In order of preference:
/// 1. the nearest ancestor of `cwd` (itself included) named `src`
/// 2. `env_override`, unless empty
/// 3. `home/src`
///
/// # Errors
///
/// - Return [`NoSourceRoot`] when every source is unavailable.
pub fn resolve_source_root(
    cwd: &Path,
    env_override: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf, NoSourceRoot> {
    if let Some(dir) = cwd
        .ancestors()
        .find(|dir| dir.file_name() == Some(OsStr::new(SRC_DIR_NAME)))
    {
        return Ok(dir.to_path_buf());
    }
    if let Some(root) = env_override.filter(|root| !root.is_empty()) {
        return Ok(PathBuf::from(root));
    }
    home.map(|home| home.join(SRC_DIR_NAME)).ok_or(NoSourceRoot)
}

/// Host without its `:port` suffix.
pub fn simplified_host(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}

/// Checkout directory for `reference` under `root`.
///
/// Empty, `.` and `..` path segments are skipped. The last segment loses its
/// extension unless its only dot is the leading one.
pub fn destination(root: &Path, reference: &GitReference) -> PathBuf {
    let mut target = root.to_path_buf();

    let host = simplified_host(&reference.host);
    if !host.is_empty() {
        target.push(host);
    }

    let segments: Vec<&str> = reference
        .path
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .collect();
    if let Some((last, parents)) = segments.split_last() {
        for segment in parents {
            target.push(segment);
        }
        target.push(strip_extension(last));
    }
    target
}

fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}
