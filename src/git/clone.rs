use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::{debug, info, warn};
use thiserror::Error;

use super::url::GitReference;

const GIT_BIN: &str = "git";

#[derive(Error, Debug)]
pub enum CloneError {
    #[error("cannot create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot run git: {0}")]
    Spawn(#[source] io::Error),

    #[error("git clone failed ({0})")]
    Failed(ExitStatus),
}

/// What to hand to `git clone` for `raw`.
///
/// git runs inside the checkout directory, so a relative local path is joined
/// onto `cwd` first. Remote addresses are returned untouched.
pub fn clone_source(raw: &str, reference: &GitReference, cwd: &Path) -> PathBuf {
    let local = Path::new(raw);
    let is_path = reference.scheme == "file" && reference.host.is_empty() && reference.path == raw;
    if is_path && local.is_relative() {
        cwd.join(local)
    } else {
        PathBuf::from(raw)
    }
}

/// Run `git clone <source> .` inside `target`, creating it first.
///
/// git inherits stdin, stdout and stderr so progress and credential prompts
/// reach the terminal. A target created here is removed again when the clone
/// fails.
pub fn clone_into(source: &Path, target: &Path) -> Result<(), CloneError> {
    clone_with(OsStr::new(GIT_BIN), source, target)
}

fn clone_with(git: &OsStr, source: &Path, target: &Path) -> Result<(), CloneError> {
    let existed = target.exists();
    fs::create_dir_all(target).map_err(|err| CloneError::CreateDir {
        path: target.to_path_buf(),
        source: err,
    })?;

    info!("Cloning {} into {}", source.display(), target.display());
    let result = run_clone(git, source, target);
    if result.is_err() && !existed {
        debug!("removing {}", target.display());
        if let Err(err) = fs::remove_dir_all(target) {
            warn!("failed to remove {}: {}", target.display(), err);
        }
    }
    result
}

fn run_clone(git: &OsStr, source: &Path, target: &Path) -> Result<(), CloneError> {
    let status = Command::new(git)
        .arg("clone")
        .arg(source)
        .arg(".")
        .current_dir(target)
        .status()
        .map_err(CloneError::Spawn)?;
    debug!("git exited with {}", status);

    if !status.success() {
        return Err(CloneError::Failed(status));
    }
    Ok(())
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A stand-in for git that only succeeds when its source directory exists
    /// as seen from the checkout directory.
    fn fake_git(dir: &Path) -> PathBuf {
        let script = dir.join("fake-git");
        fs::write(&script, "#!/bin/sh\ntest -d \"$2\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn test_clone_creates_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("github.com/owner/repo");

        clone_with(
            OsStr::new("true"),
            Path::new("git@github.com:owner/repo.git"),
            &target,
        )
        .unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_clone_relative_local_source() {
        let dir = tempfile::tempdir().unwrap();
        let git = fake_git(dir.path());
        fs::create_dir(dir.path().join("repo.git")).unwrap();
        let target = dir.path().join("root/repo");

        let raw = "./repo.git";
        let reference = GitReference {
            scheme: "file".to_string(),
            user: String::new(),
            host: String::new(),
            path: raw.to_string(),
        };
        let source = clone_source(raw, &reference, dir.path());
        clone_with(git.as_os_str(), &source, &target).unwrap();
        assert!(target.is_dir());

        // unresolved, the same path points inside the checkout directory
        let other = dir.path().join("root/other");
        assert!(matches!(
            clone_with(git.as_os_str(), Path::new(raw), &other),
            Err(CloneError::Failed(_))
        ));
    }

    #[test]
    fn test_clone_failure_removes_created_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("github.com/owner/repo");
        assert!(matches!(
            clone_with(OsStr::new("false"), Path::new("src"), &target),
            Err(CloneError::Failed(_))
        ));
        assert!(!target.exists());
    }

    #[test]
    fn test_clone_failure_keeps_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            clone_with(OsStr::new("false"), Path::new("src"), dir.path()),
            Err(CloneError::Failed(_))
        ));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_clone_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            clone_with(OsStr::new("/nonexistent/git"), Path::new("src"), dir.path()),
            Err(CloneError::Spawn(_))
        ));
    }

    #[test]
    fn test_clone_target_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, b"").unwrap();
        assert!(matches!(
            clone_with(OsStr::new("true"), Path::new("src"), &file.join("repo")),
            Err(CloneError::CreateDir { .. })
        ));
    }
}
