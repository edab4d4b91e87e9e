//! Base64 encoding and decoding utilities.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - Custom alphabets
//! - Format validation without decoding
//!
//! Decoding is a single table read per symbol. [`decode`] trusts its input and never
//! fails; [`try_decode`] rejects malformed input instead.
//!
//! # Example
//!
//! ```
//! use cross_base64::{decode, encode, is_valid, Mode};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Mode::Standard);
//! assert!(is_valid(&encoded, Mode::Standard));
//! let decoded = decode(&encoded, Mode::Standard);
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod error;
mod text;
mod validate;

pub use alphabet::{Alphabet, Mode, STANDARD, URL};
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD, PAD_BYTE};
pub use decode::{
    decode, decode_with, decoded_len, from_base64, from_base64_url, try_decode, try_decode_with,
};
pub use encode::{encode, encode_to_slice, encode_with, encoded_len, to_base64, to_base64_url};
pub use error::Base64Error;
pub use text::{decode_to_text, encode_text, try_decode_to_text};
pub use validate::{is_valid, is_valid_value};
