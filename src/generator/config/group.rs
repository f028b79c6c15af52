//! Group generation utilities
//!
//! Every generated config carries the same three groups. The routing rules in
//! the Clash template send traffic to [`AGGREGATE_GROUP`] by name, so the names
//! are not configurable.

use crate::models::{Proxy, ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};
use crate::settings::GroupSettings;

/// Manual selection group offered to the user
pub const AGGREGATE_GROUP: &str = "翻墙机场";
/// Latency-probing group
pub const AUTO_GROUP: &str = "自动选择";
/// Failover group
pub const FALLBACK_GROUP: &str = "故障转移";

/// Derive the proxy groups for a list of nodes
///
/// # Returns
///
/// `[aggregate, auto, fallback]`, where the aggregate group lists the two
/// probing groups ahead of every node name and the probing groups list the
/// node names only. Node order is kept.
pub fn build_proxy_groups(nodes: &[Proxy], settings: &GroupSettings) -> ProxyGroupConfigs {
    let names: Vec<String> = nodes.iter().map(|node| node.remark.clone()).collect();

    let mut aggregate = ProxyGroupConfig::new(AGGREGATE_GROUP, ProxyGroupType::Select);
    aggregate.proxies.reserve(names.len() + 2);
    aggregate.proxies.push(AUTO_GROUP.to_string());
    aggregate.proxies.push(FALLBACK_GROUP.to_string());
    aggregate.proxies.extend(names.iter().cloned());

    let mut auto = ProxyGroupConfig::new(AUTO_GROUP, ProxyGroupType::URLTest)
        .with_health_check(&settings.probe_url, settings.auto_interval);
    auto.proxies = names.clone();

    let mut fallback = ProxyGroupConfig::new(FALLBACK_GROUP, ProxyGroupType::Fallback)
        .with_health_check(&settings.probe_url, settings.fallback_interval);
    fallback.proxies = names;

    vec![aggregate, auto, fallback]
}
