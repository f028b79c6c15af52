use crate::generator::config::group::build_proxy_groups;
use crate::generator::yaml::clash::{ClashProxy, ClashProxyGroup};
use crate::models::Proxy;
use crate::settings::GroupSettings;
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Built-in Clash template with tun, dns and routing rules
pub static CLASH_BASE_TEMPLATE: &str = include_str!("../../../../base/clash.yaml");

pub const PROXIES_MARKER: &str = "{{PROXIES}}";
pub const PROXY_GROUPS_MARKER: &str = "{{PROXY-GROUPS}}";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("template has no {0} marker")]
    MissingMarker(&'static str),

    #[error("cannot serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convert proxies to Clash format
///
/// Every node and every derived group is written as one compact JSON record
/// per line (`"  - {...}\n"`) and spliced into `template` in place of the
/// first [`PROXIES_MARKER`] and the first [`PROXY_GROUPS_MARKER`]. The rest of
/// the template is copied through untouched.
///
/// # Arguments
/// * `nodes` - Proxy nodes in feed order
/// * `template` - Template text containing both markers
/// * `groups` - Health-check parameters of the probing groups
pub fn proxy_to_clash(
    nodes: &[Proxy],
    template: &str,
    groups: &GroupSettings,
) -> Result<String, GenerateError> {
    // Locate both markers in the template before anything is inserted, so a
    // node name that happens to contain a marker is never substituted.
    let proxies_at = template
        .find(PROXIES_MARKER)
        .ok_or(GenerateError::MissingMarker(PROXIES_MARKER))?;
    let groups_at = template
        .find(PROXY_GROUPS_MARKER)
        .ok_or(GenerateError::MissingMarker(PROXY_GROUPS_MARKER))?;

    let proxies_block = records(nodes.iter().map(ClashProxy::from))?;
    let proxy_groups = build_proxy_groups(nodes, groups);
    let groups_block = records(proxy_groups.iter().map(ClashProxyGroup::from))?;
    debug!(
        "Generated {} proxies and {} proxy groups",
        nodes.len(),
        proxy_groups.len()
    );

    let mut splices = [
        (proxies_at, PROXIES_MARKER.len(), proxies_block),
        (groups_at, PROXY_GROUPS_MARKER.len(), groups_block),
    ];
    splices.sort_by_key(|(at, _, _)| *at);

    let mut output = String::with_capacity(
        template.len() + splices.iter().map(|(_, _, block)| block.len()).sum::<usize>(),
    );
    let mut cursor = 0;
    for (at, len, block) in &splices {
        output.push_str(&template[cursor..*at]);
        output.push_str(block);
        cursor = at + len;
    }
    output.push_str(&template[cursor..]);
    Ok(output)
}

fn records<T: Serialize>(items: impl Iterator<Item = T>) -> Result<String, serde_json::Error> {
    let mut block = String::new();
    for item in items {
        block.push_str("  - ");
        block.push_str(&serde_json::to_string(&item)?);
        block.push('\n');
    }
    Ok(block)
}
