/// Kind of a generated proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyGroupType {
    /// Manual choice
    Select,
    /// Lowest-latency member wins
    URLTest,
    /// First healthy member wins
    Fallback,
}

impl ProxyGroupType {
    /// Name Clash uses for this group kind
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::Fallback => "fallback",
        }
    }
}

/// Periodic probe Clash runs against every member of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub url: String,
    /// Seconds between probes
    pub interval: u32,
}

/// A proxy group and its members, in order.
///
/// Only probing groups (`url-test`, `fallback`) carry a [`HealthCheck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    pub name: String,
    pub group_type: ProxyGroupType,
    /// Member names: proxies or other groups
    pub proxies: Vec<String>,
    pub health_check: Option<HealthCheck>,
}

impl ProxyGroupConfig {
    pub fn new(name: impl Into<String>, group_type: ProxyGroupType) -> Self {
        Self {
            name: name.into(),
            group_type,
            proxies: Vec::new(),
            health_check: None,
        }
    }

    pub fn with_health_check(mut self, url: impl Into<String>, interval: u32) -> Self {
        self.health_check = Some(HealthCheck {
            url: url.into(),
            interval,
        });
        self
    }

    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }
}

pub type ProxyGroupConfigs = Vec<ProxyGroupConfig>;
