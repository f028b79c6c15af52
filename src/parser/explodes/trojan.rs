use super::common::{decode_remark, parse_port, split_at};
use crate::models::{Proxy, ProxyType};
use crate::parser::error::ParseError;

const SCHEME: &str = "trojan";

/// Parse a Trojan link into a Proxy object
///
/// Format: `trojan://password@server:port?query#remark`. The query string
/// (sni, allowInsecure, ...) is skipped.
pub fn explode_trojan(trojan: &str) -> Result<Option<Proxy>, ParseError> {
    let Some(remain) = trojan.strip_prefix(ProxyType::Trojan.scheme()) else {
        return Ok(None);
    };

    let (password, remain) = split_at(remain, '@', SCHEME)?;
    let (server, remain) = split_at(remain, ':', SCHEME)?;
    let (port, remain) = split_at(remain, '?', SCHEME)?;
    let port = parse_port(port, SCHEME)?;
    let (_query, remark) = split_at(remain, '#', SCHEME)?;
    let remark = decode_remark(remark, SCHEME)?;

    Ok(Some(Proxy::trojan_construct(
        &remark, server, port, password,
    )))
}
