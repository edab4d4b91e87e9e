use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains a symbol outside the alphabet, or padding before the end.
    #[error("INVALID_BASE64_STRING")]
    InvalidBase64String,
    /// The input length cannot be produced by an encoder.
    #[error("INVALID_BASE64_LENGTH")]
    InvalidLength,
    /// The character set must be exactly 64 characters.
    #[error("chars must be 64 characters long")]
    InvalidCharSetLength,
    /// Alphabet symbols must be single-byte ASCII characters.
    #[error("chars must be ASCII")]
    NonAsciiSymbol,
    /// Every alphabet symbol must be distinct.
    #[error("duplicate symbol {0:?} in chars")]
    DuplicateSymbol(char),
    /// The padding symbol must be ASCII and must not be an alphabet symbol.
    #[error("invalid padding symbol {0:?}")]
    InvalidPadding(char),
    /// The decoded bytes are not valid UTF-8.
    #[error("INVALID_UTF8")]
    InvalidUtf8,
}
