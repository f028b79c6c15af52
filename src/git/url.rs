use std::collections::HashSet;
use std::convert::Infallible;

use regex::Regex;
use url::Url;

use crate::utils::FirstMatch;

/// Remote schemes git understands.
pub const GIT_TRANSPORTS: [&str; 9] = [
    "ssh", "git", "git+ssh", "http", "https", "ftp", "ftps", "rsync", "file",
];

const SCP_PATTERN: &str = r"^([a-zA-Z0-9_]+@)?([a-zA-Z0-9._-]+):(.*)$";

/// A classified git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitReference {
    pub scheme: String,
    /// Empty when the address carries no user
    pub user: String,
    /// Host, with `:port` when one was given. Transport URLs have their host
    /// lowercased and a default port dropped.
    pub host: String,
    pub path: String,
}

/// Set of accepted transport schemes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSet {
    transports: HashSet<String>,
}

impl TransportSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transports: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn valid(&self, transport: &str) -> bool {
        self.transports.contains(transport)
    }
}

impl Default for TransportSet {
    fn default() -> Self {
        Self::new(GIT_TRANSPORTS)
    }
}

/// Classifies git remote addresses.
///
/// Tries, in order, a URL whose scheme is a known transport, the scp-like
/// `[user@]host:path` shorthand, and finally a local path. The last form
/// accepts anything, so [`GitUrlParser::parse`] never fails.
#[derive(Debug, Clone)]
pub struct GitUrlParser {
    transports: TransportSet,
    scp: Regex,
}

impl GitUrlParser {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_transports(TransportSet::default())
    }

    pub fn with_transports(transports: TransportSet) -> Result<Self, regex::Error> {
        Ok(Self {
            transports,
            scp: Regex::new(SCP_PATTERN)?,
        })
    }

    pub fn parse(&self, raw: &str) -> GitReference {
        let found = FirstMatch::new()
            .or("transport", |s: &str| Ok::<_, Infallible>(self.parse_transport(s)))
            .or("scp", |s: &str| Ok(self.parse_scp(s)))
            .apply(raw)
            .unwrap_or_else(|never| match never {});
        found.unwrap_or_else(|| Self::parse_local(raw))
    }

    /// A standard URL whose scheme is in the transport set.
    pub fn parse_transport(&self, raw: &str) -> Option<GitReference> {
        let url = Url::parse(raw).ok()?;
        if !self.transports.valid(url.scheme()) {
            return None;
        }

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let path = urlencoding::decode(url.path())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| url.path().to_string());

        Some(GitReference {
            scheme: url.scheme().to_string(),
            user: url.username().to_string(),
            host,
            path,
        })
    }

    /// The scp-like shorthand, e.g. `git@github.com:owner/repo.git`.
    pub fn parse_scp(&self, raw: &str) -> Option<GitReference> {
        let caps = self.scp.captures(raw)?;
        let user = caps
            .get(1)
            .map_or("", |m| m.as_str().trim_end_matches('@'));

        Some(GitReference {
            scheme: "ssh".to_string(),
            user: user.to_string(),
            host: caps[2].to_string(),
            path: caps[3].to_string(),
        })
    }

    pub fn parse_local(raw: &str) -> GitReference {
        GitReference {
            scheme: "file".to_string(),
            user: String::new(),
            host: String::new(),
            path: raw.to_string(),
        }
    }
}
