use crate::models::{NumberOrString, Proxy, ProxyGroupConfig, ProxyType};
use serde::Serialize;

fn option_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Fields shared by every Clash proxy entry
#[derive(Debug, Clone, Serialize)]
pub struct CommonProxyOptions<'a> {
    pub name: &'a str,
    pub server: &'a str,
    pub port: &'a NumberOrString,
}

/// Represents a single proxy in Clash configuration
///
/// Serialized as one compact JSON object, which Clash reads as a YAML flow
/// mapping. The `type` tag comes first, then the common fields.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ClashProxy<'a> {
    #[serde(rename = "ss")]
    Shadowsocks {
        #[serde(flatten)]
        common: CommonProxyOptions<'a>,
        cipher: &'a str,
        password: &'a str,
        udp: bool,
    },
    #[serde(rename = "trojan")]
    Trojan {
        #[serde(flatten)]
        common: CommonProxyOptions<'a>,
        password: &'a str,
        udp: bool,
    },
    #[serde(rename = "vmess")]
    VMess {
        #[serde(flatten)]
        common: CommonProxyOptions<'a>,
        cipher: &'a str,
        uuid: &'a str,
        #[serde(rename = "alterId")]
        alter_id: &'a NumberOrString,
        network: &'a str,
        udp: bool,
    },
}

static DEFAULT_ALTER_ID: NumberOrString = NumberOrString::Number(0);

impl<'a> From<&'a Proxy> for ClashProxy<'a> {
    fn from(node: &'a Proxy) -> Self {
        let common = CommonProxyOptions {
            name: &node.remark,
            server: &node.hostname,
            port: &node.port,
        };
        match node.proxy_type {
            ProxyType::Shadowsocks => ClashProxy::Shadowsocks {
                common,
                cipher: option_str(&node.encrypt_method),
                password: option_str(&node.password),
                udp: node.udp,
            },
            ProxyType::Trojan => ClashProxy::Trojan {
                common,
                password: option_str(&node.password),
                udp: node.udp,
            },
            ProxyType::VMess => ClashProxy::VMess {
                common,
                cipher: option_str(&node.encrypt_method),
                uuid: option_str(&node.user_id),
                alter_id: node.alter_id.as_ref().unwrap_or(&DEFAULT_ALTER_ID),
                network: option_str(&node.transfer_protocol),
                udp: node.udp,
            },
        }
    }
}

/// Represents a proxy group in Clash configuration
#[derive(Debug, Clone, Serialize)]
pub struct ClashProxyGroup<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub group_type: &'static str,
    pub proxies: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl<'a> From<&'a ProxyGroupConfig> for ClashProxyGroup<'a> {
    fn from(group: &'a ProxyGroupConfig) -> Self {
        ClashProxyGroup {
            name: &group.name,
            group_type: group.type_str(),
            proxies: &group.proxies,
            url: group.health_check.as_ref().map(|check| check.url.as_str()),
            interval: group.health_check.as_ref().map(|check| check.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProxyGroupType;

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn test_ss_output() {
        let node = Proxy::ss_construct("hk", "1.2.3.4", 8388, "pw", "aes-128-gcm");
        assert_eq!(
            to_json(&ClashProxy::from(&node)),
            r#"{"type":"ss","name":"hk","server":"1.2.3.4","port":8388,"cipher":"aes-128-gcm","password":"pw","udp":true}"#
        );
    }

    #[test]
    fn test_trojan_output() {
        let node = Proxy::trojan_construct("jp", "jp.example.com", 443, "secret");
        assert_eq!(
            to_json(&ClashProxy::from(&node)),
            r#"{"type":"trojan","name":"jp","server":"jp.example.com","port":443,"password":"secret","udp":true}"#
        );
    }

    #[test]
    fn test_vmess_output_keeps_string_fields() {
        let node = Proxy::vmess_construct("us", "us.example.com", "443".into(), "uuid-1", "0".into(), "ws");
        assert_eq!(
            to_json(&ClashProxy::from(&node)),
            r#"{"type":"vmess","name":"us","server":"us.example.com","port":"443","cipher":"auto","uuid":"uuid-1","alterId":"0","network":"ws","udp":true}"#
        );
    }

    #[test]
    fn test_group_output() {
        let select = ProxyGroupConfig::new("pick", ProxyGroupType::Select);
        assert_eq!(
            to_json(&ClashProxyGroup::from(&select)),
            r#"{"name":"pick","type":"select","proxies":[]}"#
        );

        let mut probe = ProxyGroupConfig::new("auto", ProxyGroupType::URLTest)
            .with_health_check("http://example.com/204", 300);
        probe.proxies.push("a".to_string());
        assert_eq!(
            to_json(&ClashProxyGroup::from(&probe)),
            r#"{"name":"auto","type":"url-test","proxies":["a"],"url":"http://example.com/204","interval":300}"#
        );
    }
}
