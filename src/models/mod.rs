//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use sillytools::models::{Proxy, ProxyType};
//!
//! let proxy = Proxy::trojan_construct("hk-01", "example.com", 443, "secret");
//! assert_eq!(proxy.proxy_type, ProxyType::Trojan);
//! assert!(proxy.udp);
//! ```

mod proxy;
mod proxy_group_config;

pub use proxy::*;
pub use proxy_group_config::*;
