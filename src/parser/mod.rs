//! Subscription and share-link parsing.

pub mod error;
pub mod explodes;
pub mod subparser;

pub use error::ParseError;
pub use explodes::{explode, explode_line, explode_sub};
pub use subparser::{add_nodes, SubscriptionError};
