//! URL encoding/decoding utilities

use std::string::FromUtf8Error;

/// Decodes a query component: `+` becomes a space before percent escapes
/// are resolved, so an encoded `%2B` still yields a literal plus sign.
///
/// Escapes that do not form valid UTF-8 are reported as an error.
pub fn query_unescape(input: &str) -> Result<String, FromUtf8Error> {
    urlencoding::decode(&input.replace('+', " ")).map(|cow| cow.into_owned())
}
