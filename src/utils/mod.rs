pub mod alternatives;
pub mod base64;
pub mod http;
pub mod url;

// Re-export common utilities
pub use alternatives::FirstMatch;
