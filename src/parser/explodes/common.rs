use crate::models::Proxy;
use crate::parser::error::ParseError;
use crate::utils::base64::base64_decode;
use crate::utils::url::query_unescape;
use crate::utils::FirstMatch;
use std::collections::HashSet;

/// Build the ordered link classifier: shadowsocks, then trojan, then vmess.
pub fn link_classifier() -> FirstMatch<'static, Proxy, ParseError> {
    FirstMatch::new()
        .or("ss", super::ss::explode_ss)
        .or("trojan", super::trojan::explode_trojan)
        .or("vmess", super::vmess::explode_vmess)
}

/// Explode a proxy link into a Proxy object
///
/// Returns `Ok(None)` when the link is in none of the supported formats.
pub fn explode(link: &str) -> Result<Option<Proxy>, ParseError> {
    link_classifier().apply(link.trim())
}

/// Like [`explode`], but an unrecognised link is an error.
pub fn explode_line(link: &str) -> Result<Proxy, ParseError> {
    explode(link)?.ok_or(ParseError::UnsupportedFormat)
}

/// Explode a subscription body into a vector of Proxy objects
///
/// The body is base64 text that decodes to one proxy link per line. Parsing
/// is all-or-nothing: the first line that fails aborts the whole batch.
pub fn explode_sub(sub: &str) -> Result<Vec<Proxy>, ParseError> {
    let decoded = decode_base64_utf8(sub.trim(), "subscription")?;
    let decoded = decoded.trim();
    if decoded.is_empty() {
        return Err(ParseError::EmptySubscription);
    }

    let classifier = link_classifier();
    let mut names = HashSet::new();
    let mut nodes = Vec::new();

    for (index, line) in decoded.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let node = classifier
            .apply(line.trim())
            .and_then(|node| node.ok_or(ParseError::UnsupportedFormat))
            .map_err(|source| ParseError::Line {
                line: index + 1,
                link: line.to_string(),
                source: Box::new(source),
            })?;

        log::debug!(
            "parsed {} proxy {:?} at {}:{}",
            node.proxy_type,
            node.remark,
            node.hostname,
            node.port
        );
        if !names.insert(node.remark.clone()) {
            log::warn!("duplicate proxy name {:?}", node.remark);
        }
        nodes.push(node);
    }

    Ok(nodes)
}

/// Split `input` at the first `delimiter`, reporting a missing one.
pub(crate) fn split_at<'a>(
    input: &'a str,
    delimiter: char,
    scheme: &'static str,
) -> Result<(&'a str, &'a str), ParseError> {
    input
        .split_once(delimiter)
        .ok_or(ParseError::MissingDelimiter { scheme, delimiter })
}

pub(crate) fn parse_port(value: &str, scheme: &'static str) -> Result<u16, ParseError> {
    value.parse::<u16>().map_err(|_| ParseError::InvalidPort {
        scheme,
        value: value.to_string(),
    })
}

pub(crate) fn decode_base64_utf8(input: &str, scheme: &'static str) -> Result<String, ParseError> {
    let bytes = base64_decode(input).map_err(|source| ParseError::Base64 { scheme, source })?;
    String::from_utf8(bytes).map_err(|source| ParseError::Utf8 { scheme, source })
}

/// Decode the percent-encoded remark that follows `#` in a share link.
pub(crate) fn decode_remark(input: &str, scheme: &'static str) -> Result<String, ParseError> {
    query_unescape(input).map_err(|source| ParseError::Utf8 { scheme, source })
}
