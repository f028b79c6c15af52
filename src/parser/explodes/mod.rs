pub mod common;
pub mod ss;
pub mod trojan;
pub mod vmess;

pub use common::{explode, explode_line, explode_sub, link_classifier};
pub use ss::explode_ss;
pub use trojan::explode_trojan;
pub use vmess::explode_vmess;
