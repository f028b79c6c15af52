//! Git remote classification and the local checkout layout.
//!
//! A remote address is classified into a [`GitReference`], mapped to a
//! directory under the source root, and cloned there.

pub mod clone;
pub mod layout;
pub mod url;

pub use clone::{clone_into, clone_source, CloneError};
pub use layout::{destination, resolve_source_root, simplified_host, NoSourceRoot, SRC_ROOT_ENV};
pub use self::url::{GitReference, GitUrlParser, TransportSet};
