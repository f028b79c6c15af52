//! Proxies parsed from share links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Share-link flavour a [`Proxy`] was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Shadowsocks,
    Trojan,
    VMess,
}

impl ProxyType {
    /// Link scheme prefix that identifies this proxy type.
    pub fn scheme(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "ss://",
            ProxyType::Trojan => "trojan://",
            ProxyType::VMess => "vmess://",
        }
    }

    /// Converts a `ProxyType` into a human-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "SS",
            ProxyType::Trojan => "Trojan",
            ProxyType::VMess => "VMess",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar that vmess share links encode either as a JSON number or as a
/// JSON string. The form found in the link is kept so it can be emitted
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    String(String),
}

impl From<u16> for NumberOrString {
    fn from(value: u16) -> Self {
        NumberOrString::Number(value as u64)
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        NumberOrString::String(value.to_string())
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(n) => write!(f, "{}", n),
            NumberOrString::String(s) => f.write_str(s),
        }
    }
}

/// Represents a parsed proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub proxy_type: ProxyType,
    pub remark: String,
    pub hostname: String,
    pub port: NumberOrString,

    pub password: Option<String>,
    pub encrypt_method: Option<String>,
    pub user_id: Option<String>,
    pub alter_id: Option<NumberOrString>,
    pub transfer_protocol: Option<String>,

    pub udp: bool,
}

impl Proxy {
    fn base(proxy_type: ProxyType, remark: &str, hostname: &str, port: NumberOrString) -> Self {
        Proxy {
            proxy_type,
            remark: remark.to_string(),
            hostname: hostname.to_string(),
            port,
            password: None,
            encrypt_method: None,
            user_id: None,
            alter_id: None,
            transfer_protocol: None,
            udp: true,
        }
    }

    pub fn ss_construct(
        remark: &str,
        hostname: &str,
        port: u16,
        password: &str,
        method: &str,
    ) -> Self {
        Proxy {
            password: Some(password.to_string()),
            encrypt_method: Some(method.to_string()),
            ..Self::base(ProxyType::Shadowsocks, remark, hostname, port.into())
        }
    }

    pub fn trojan_construct(remark: &str, hostname: &str, port: u16, password: &str) -> Self {
        Proxy {
            password: Some(password.to_string()),
            ..Self::base(ProxyType::Trojan, remark, hostname, port.into())
        }
    }

    pub fn vmess_construct(
        remark: &str,
        hostname: &str,
        port: NumberOrString,
        id: &str,
        aid: NumberOrString,
        net: &str,
    ) -> Self {
        Proxy {
            user_id: Some(id.to_string()),
            alter_id: Some(aid),
            transfer_protocol: Some(net.to_string()),
            encrypt_method: Some(VMESS_CIPHER.to_string()),
            ..Self::base(ProxyType::VMess, remark, hostname, port)
        }
    }
}

/// Cipher reported for every vmess proxy; the client negotiates the real one.
pub const VMESS_CIPHER: &str = "auto";
