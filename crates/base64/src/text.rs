//! Text convenience wrappers: UTF-8 text in, base64 out, and back.

use crate::{decode, encode, try_decode, Base64Error, Mode};

/// Encodes the UTF-8 bytes of `text`.
///
/// # Example
///
/// ```
/// use cross_base64::{encode_text, Mode};
///
/// assert_eq!(encode_text("Hello", Mode::Standard), "SGVsbG8=");
/// assert_eq!(encode_text("Hello", Mode::Url), "SGVsbG8");
/// ```
pub fn encode_text(text: &str, mode: Mode) -> String {
    encode(text.as_bytes(), mode)
}

/// Decodes base64 text and interprets the bytes as UTF-8.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
///
/// # Example
///
/// ```
/// use cross_base64::{decode_to_text, Mode};
///
/// assert_eq!(decode_to_text("SGVsbG8=", Mode::Standard), "Hello");
/// ```
pub fn decode_to_text(encoded: &str, mode: Mode) -> String {
    String::from_utf8_lossy(&decode(encoded, mode)).into_owned()
}

/// Decodes base64 text into a UTF-8 string, rejecting malformed base64 or UTF-8.
///
/// # Errors
///
/// Returns the [`try_decode`] errors, or [`Base64Error::InvalidUtf8`].
pub fn try_decode_to_text(encoded: &str, mode: Mode) -> Result<String, Base64Error> {
    String::from_utf8(try_decode(encoded, mode)?).map_err(|_| Base64Error::InvalidUtf8)
}
