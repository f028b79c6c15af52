use crate::models::Proxy;
use crate::parser::error::ParseError;
use crate::parser::explodes::explode_sub;
use crate::utils::http::{get_sub_info_from_header, web_get, FetchError, ProxyConfig};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubscriptionError {
    #[error("cannot download subscription data: {0}")]
    Fetch(#[from] FetchError),

    #[error("cannot parse subscription data: {0}")]
    Parse(#[from] ParseError),
}

/// Download a subscription and explode every link it contains.
///
/// # Arguments
/// * `link` - Subscription URL
/// * `proxy` - Proxy used for the download itself
///
/// # Returns
/// * `Ok(nodes)` in feed order
/// * `Err(SubscriptionError)` on the first download or parse failure
pub fn add_nodes(link: &str, proxy: &ProxyConfig) -> Result<Vec<Proxy>, SubscriptionError> {
    info!("Fetching subscription from {}", link);
    let (sub_content, headers) = web_get(link, proxy)?;

    let sub_info = get_sub_info_from_header(&headers);
    if !sub_info.is_empty() {
        info!("Subscription info: {}", sub_info);
    }

    let nodes = explode_sub(&sub_content)?;
    info!("Parsed {} proxies", nodes.len());
    Ok(nodes)
}
