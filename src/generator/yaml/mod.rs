pub mod clash;

pub use clash::{ClashProxy, ClashProxyGroup, CommonProxyOptions};
