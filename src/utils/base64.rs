use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine as _,
};

/// Standard alphabet that accepts input with or without `=` padding.
/// Share links are produced by many different clients and padding is
/// frequently stripped.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a Base64 string, tolerating missing padding, URL-safe
/// characters and embedded whitespace such as line wrapping.
///
/// # Arguments
/// * `input` - The Base64 encoded string.
///
/// # Returns
/// The decoded bytes, or the underlying [`DecodeError`].
pub fn base64_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = input.split_ascii_whitespace().collect();
    STANDARD_LENIENT.decode(url_safe_base64_reverse(&compact))
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_missing_padding() {
        assert_eq!(
            base64_decode("YWVzLTI1Ni1nY206cGFzcw").unwrap(),
            b"aes-256-gcm:pass"
        );
        assert_eq!(
            base64_decode("YWVzLTI1Ni1nY206cGFzcw==").unwrap(),
            b"aes-256-gcm:pass"
        );
    }

    #[test]
    fn test_decode_ignores_line_wrapping() {
        let wrapped = "aGVsbG8g\r\nd29ybGQ=\n";
        assert_eq!(base64_decode(wrapped).unwrap(), b"hello world");
    }

    #[test]
    fn test_decode_accepts_url_safe_alphabet() {
        let encoded = base64_encode("??>>");
        let url_safe = encoded.replace('+', "-").replace('/', "_");
        assert_eq!(base64_decode(&url_safe).unwrap(), b"??>>");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(base64_decode("not base64!").is_err());
    }
}
