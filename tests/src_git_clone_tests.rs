use std::fs;
use std::path::PathBuf;

use sillytools::git::{destination, resolve_source_root, GitUrlParser};

#[cfg(test)]
mod src_git_clone_tests {
    use super::*;

    #[test]
    fn test_classification() {
        let parser = GitUrlParser::new().unwrap();

        let scp = parser.parse("git@host:path");
        assert_eq!(scp.scheme, "ssh");
        assert_eq!(scp.user, "git");
        assert_eq!(scp.host, "host");
        assert_eq!(scp.path, "path");

        let https = parser.parse("https://host/path.git");
        assert_eq!(https.scheme, "https");
        assert_eq!(https.host, "host");
        assert_eq!(https.path, "/path.git");

        let local = parser.parse("/local/path");
        assert_eq!(local.scheme, "file");
        assert_eq!(local.host, "");
        assert_eq!(local.path, "/local/path");
    }

    #[test]
    fn test_scp_and_url_forms_share_a_checkout() {
        let parser = GitUrlParser::new().unwrap();
        let root = PathBuf::from("/home/me/src");

        let from_scp = destination(&root, &parser.parse("git@github.com:owner/repo.git"));
        let from_https = destination(&root, &parser.parse("https://github.com/owner/repo.git"));
        let from_ssh = destination(&root, &parser.parse("ssh://git@github.com:22/owner/repo"));

        assert_eq!(from_scp, root.join("github.com/owner/repo"));
        assert_eq!(from_https, from_scp);
        assert_eq!(from_ssh, from_scp);
    }

    #[test]
    fn test_root_from_enclosing_src_directory() {
        let home = tempfile::tempdir().unwrap();
        let nested = home.path().join("work/src/github.com/owner");
        fs::create_dir_all(&nested).unwrap();

        let root = resolve_source_root(&nested, Some("/ignored"), Some(home.path())).unwrap();
        assert_eq!(root, home.path().join("work/src"));
    }

    #[test]
    fn test_root_falls_back_to_home() {
        let home = tempfile::tempdir().unwrap();
        let outside = home.path().join("downloads");
        fs::create_dir_all(&outside).unwrap();

        let root = resolve_source_root(&outside, None, Some(home.path())).unwrap();
        assert_eq!(root, home.path().join("src"));

        let parser = GitUrlParser::new().unwrap();
        let target = destination(&root, &parser.parse("git@gitlab.com:group/sub/project.git"));
        assert_eq!(target, home.path().join("src/gitlab.com/group/sub/project"));
    }
}
