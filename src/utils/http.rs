use std::collections::HashMap;
use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{Proxy, StatusCode};
use thiserror::Error;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT: u64 = 15;

/// Environment variables consulted when the proxy is set to `SYSTEM`.
const PROXY_ENV: [&str; 6] = [
    "all_proxy",
    "ALL_PROXY",
    "http_proxy",
    "HTTP_PROXY",
    "https_proxy",
    "HTTPS_PROXY",
];

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to set proxy {proxy}: {source}")]
    Proxy {
        proxy: String,
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("failed to send request: {0}")]
    Request(reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    pub proxy: Option<String>,
}

/// Interpret a `--proxy` argument.
///
/// `SYSTEM` picks up the usual `*_proxy` environment variables, `NONE` or an
/// empty string disables proxying, anything else is used as a proxy URL.
pub fn parse_proxy(proxy_str: &str) -> ProxyConfig {
    match proxy_str {
        "SYSTEM" => ProxyConfig {
            proxy: system_proxy(),
        },
        "NONE" | "" => ProxyConfig { proxy: None },
        other => ProxyConfig {
            proxy: Some(other.to_string()),
        },
    }
}

fn system_proxy() -> Option<String> {
    PROXY_ENV
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|proxy| !proxy.is_empty())
}

/// Makes an HTTP GET request to the specified URL
///
/// # Arguments
/// * `url` - The URL to request
/// * `proxy_config` - Optional proxy to route the request through
///
/// # Returns
/// * `Ok((body, headers))` - The response body and lower-cased headers
/// * `Err(FetchError)` - If the request failed or returned a non-200 status
pub fn web_get(
    url: &str,
    proxy_config: &ProxyConfig,
) -> Result<(String, HashMap<String, String>), FetchError> {
    let mut client_builder = Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT))
        .user_agent(concat!("sillytools/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = proxy_config.proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy).map_err(|source| FetchError::Proxy {
            proxy: proxy.to_string(),
            source,
        })?;
        client_builder = client_builder.proxy(proxy);
    }

    let client = client_builder.build().map_err(FetchError::Client)?;
    let response = client.get(url).send().map_err(FetchError::Request)?;

    let mut resp_headers = HashMap::new();
    for (key, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            resp_headers.insert(key.to_string(), v.to_string());
        }
    }

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().map_err(FetchError::Body)?;
    Ok((body, resp_headers))
}

/// Extract subscription info from HTTP headers
///
/// # Arguments
/// * `headers` - HTTP response headers
///
/// # Returns
/// * Subscription info string with key-value pairs, empty if the
///   `subscription-userinfo` header is missing or carries nothing useful
pub fn get_sub_info_from_header(headers: &HashMap<String, String>) -> String {
    let mut upload: u64 = 0;
    let mut download: u64 = 0;
    let mut total: u64 = 0;
    let mut expire = String::new();

    if let Some(userinfo) = headers.get("subscription-userinfo") {
        for info_item in userinfo.split(';') {
            let Some((key, value)) = info_item.trim().split_once('=') else {
                continue;
            };
            match key {
                "upload" => upload = value.parse().unwrap_or(upload),
                "download" => download = value.parse().unwrap_or(download),
                "total" => total = value.parse().unwrap_or(total),
                "expire" => expire = value.to_string(),
                _ => {}
            }
        }
    }

    let mut parts = Vec::new();
    if upload > 0 || download > 0 {
        parts.push(format!("upload={}, download={}", upload, download));
    }
    if total > 0 {
        parts.push(format!("total={}", total));
    }
    if !expire.is_empty() {
        parts.push(format!("expire={}", expire));
    }
    parts.join(", ")
}
