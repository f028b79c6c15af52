pub mod config;
pub mod yaml;

pub use config::formats::clash::{proxy_to_clash, GenerateError, CLASH_BASE_TEMPLATE};
pub use config::group::{build_proxy_groups, AGGREGATE_GROUP, AUTO_GROUP, FALLBACK_GROUP};
