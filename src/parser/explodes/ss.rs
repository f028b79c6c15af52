use super::common::{decode_base64_utf8, decode_remark, parse_port, split_at};
use crate::models::{Proxy, ProxyType};
use crate::parser::error::ParseError;

const SCHEME: &str = "ss";

/// Parse a Shadowsocks link into a Proxy object
///
/// Format: `ss://base64(method:password)@server:port#remark`
///
/// Returns `Ok(None)` if the link does not start with `ss://`.
pub fn explode_ss(ss: &str) -> Result<Option<Proxy>, ParseError> {
    let Some(remain) = ss.strip_prefix(ProxyType::Shadowsocks.scheme()) else {
        return Ok(None);
    };

    let (secret, remain) = split_at(remain, '@', SCHEME)?;
    let decoded_secret = decode_base64_utf8(secret, SCHEME)?;
    // The password may itself contain colons
    let (method, password) = split_at(&decoded_secret, ':', SCHEME)?;

    let (server, remain) = split_at(remain, ':', SCHEME)?;
    let (port, remark) = split_at(remain, '#', SCHEME)?;
    let port = parse_port(port, SCHEME)?;
    let remark = decode_remark(remark, SCHEME)?;

    Ok(Some(Proxy::ss_construct(
        &remark, server, port, password, method,
    )))
}
