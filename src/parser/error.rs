use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while turning subscription content into proxies.
///
/// A scheme-specific parser only produces these once the link prefix has
/// matched, so every variant means "this is the right format, but broken".
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid base64 in {scheme} payload: {source}")]
    Base64 {
        scheme: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("{scheme} payload is not valid UTF-8: {source}")]
    Utf8 {
        scheme: &'static str,
        #[source]
        source: FromUtf8Error,
    },

    #[error("invalid vmess JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{scheme} link is missing '{delimiter}'")]
    MissingDelimiter {
        scheme: &'static str,
        delimiter: char,
    },

    #[error("invalid port {value:?} in {scheme} link")]
    InvalidPort { scheme: &'static str, value: String },

    #[error("vmess payload is missing field {0:?}")]
    MissingField(&'static str),

    #[error("unsupported link format (expected ss://, trojan:// or vmess://)")]
    UnsupportedFormat,

    #[error("subscription contains no proxy links")]
    EmptySubscription,

    #[error("line {line} {link:?}: {source}")]
    Line {
        line: usize,
        link: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// The innermost error, looking through [`ParseError::Line`] wrappers.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}
