use super::common::decode_base64_utf8;
use crate::models::{NumberOrString, Proxy, ProxyType};
use crate::parser::error::ParseError;
use serde::Deserialize;

const SCHEME: &str = "vmess";

/// The JSON object carried by a v2rayN style vmess share link.
#[derive(Debug, Deserialize)]
struct VmessShare {
    ps: Option<String>,
    add: Option<String>,
    port: Option<NumberOrString>,
    id: Option<String>,
    aid: Option<NumberOrString>,
    net: Option<String>,
}

/// Parse a VMess link into a Proxy object
///
/// Format: `vmess://base64(json)` where the JSON object holds `ps`, `add`,
/// `port`, `id`, `aid` and `net`. Values are carried over verbatim; a missing
/// `aid` becomes `0` and a missing `net` becomes `tcp`.
pub fn explode_vmess(vmess: &str) -> Result<Option<Proxy>, ParseError> {
    let Some(encoded) = vmess.strip_prefix(ProxyType::VMess.scheme()) else {
        return Ok(None);
    };

    let decoded = decode_base64_utf8(encoded, SCHEME)?;
    let share: VmessShare = serde_json::from_str(&decoded)?;

    let remark = share.ps.ok_or(ParseError::MissingField("ps"))?;
    let add = share.add.ok_or(ParseError::MissingField("add"))?;
    let port = share.port.ok_or(ParseError::MissingField("port"))?;
    let id = share.id.ok_or(ParseError::MissingField("id"))?;
    let aid = share.aid.unwrap_or(NumberOrString::Number(0));
    let net = share.net.unwrap_or_else(|| "tcp".to_string());

    Ok(Some(Proxy::vmess_construct(
        &remark, &add, port, &id, aid, &net,
    )))
}
