//! Alphabets and their decode lookup tables.

use tracing::debug;

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD_BYTE};
use crate::Base64Error;

/// Standard alphabet, padded with `=`.
pub static STANDARD: Alphabet = Alphabet::from_symbols(ALPHABET_BYTES, Some(PAD_BYTE));

/// URL-safe alphabet, no padding emitted.
pub static URL: Alphabet = Alphabet::from_symbols(ALPHABET_URL_BYTES, None);

/// Selects one of the two built-in alphabets.
///
/// `Mode::from(true)` is URL-safe mode, `Mode::from(false)` (and the default) is standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Standard alphabet (`+`, `/`), padded with `=`.
    #[default]
    Standard,
    /// URL-safe alphabet (`-`, `_`), unpadded.
    Url,
}

impl Mode {
    /// The process-wide alphabet for this mode.
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Mode::Standard => &STANDARD,
            Mode::Url => &URL,
        }
    }
}

impl From<bool> for Mode {
    fn from(url_mode: bool) -> Self {
        if url_mode {
            Mode::Url
        } else {
            Mode::Standard
        }
    }
}

/// A 64-symbol alphabet together with its decode tables.
///
/// `lookup` maps every possible input byte to its 6-bit value. Bytes that are not
/// alphabet symbols map to 0, the same value as the first symbol, so the table alone
/// cannot tell `A` from garbage. `valid` is the parallel mask the strict decoder uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
    pad: Option<u8>,
    lookup: [u8; 256],
    valid: [bool; 256],
}

impl Alphabet {
    /// Creates an alphabet from 64 distinct ASCII characters and an optional padding symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if `chars` is not exactly 64 distinct ASCII characters, or if
    /// `pad` is non-ASCII or one of the alphabet symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use cross_base64::{encode_with, Alphabet};
    ///
    /// let alphabet = Alphabet::new(
    ///     "./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(encode_with(b"\0\0\0", &alphabet), "....");
    /// ```
    pub fn new(chars: &str, pad: Option<char>) -> Result<Self, Base64Error> {
        Self::parse(chars, pad).inspect_err(|err| debug!(%err, chars, "rejected custom alphabet"))
    }

    fn parse(chars: &str, pad: Option<char>) -> Result<Self, Base64Error> {
        if !chars.is_ascii() {
            return Err(Base64Error::NonAsciiSymbol);
        }
        let symbols: [u8; 64] = chars
            .as_bytes()
            .try_into()
            .map_err(|_| Base64Error::InvalidCharSetLength)?;

        let mut seen = [false; 256];
        for &c in &symbols {
            if seen[c as usize] {
                return Err(Base64Error::DuplicateSymbol(c as char));
            }
            seen[c as usize] = true;
        }

        let pad = match pad {
            Some(c) if !c.is_ascii() || seen[c as usize] => {
                return Err(Base64Error::InvalidPadding(c));
            }
            Some(c) => Some(c as u8),
            None => None,
        };

        Ok(Self::from_symbols(&symbols, pad))
    }

    /// Builds the tables: a 256-entry table initialized to 0, then
    /// `lookup[symbols[i]] = i` for every position.
    const fn from_symbols(symbols: &[u8; 64], pad: Option<u8>) -> Self {
        let mut lookup = [0u8; 256];
        let mut valid = [false; 256];
        let mut i = 0;
        while i < 64 {
            lookup[symbols[i] as usize] = i as u8;
            valid[symbols[i] as usize] = true;
            i += 1;
        }
        Self {
            symbols: *symbols,
            pad,
            lookup,
            valid,
        }
    }

    /// The symbol for a 6-bit value. Only the low 6 bits of `index` are used.
    #[inline]
    pub fn symbol(&self, index: u8) -> u8 {
        self.symbols[(index & 0x3F) as usize]
    }

    /// The 64 symbols in canonical order.
    pub fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    /// The 6-bit value of `byte`, or 0 if it is not a symbol.
    #[inline]
    pub fn value(&self, byte: u8) -> u8 {
        self.lookup[byte as usize]
    }

    /// Whether `byte` is one of the 64 symbols.
    #[inline]
    pub fn is_symbol(&self, byte: u8) -> bool {
        self.valid[byte as usize]
    }

    /// The padding symbol appended by the encoder, if any.
    pub fn pad(&self) -> Option<u8> {
        self.pad
    }

    /// Whether `byte` is recognized as trailing padding when decoding.
    ///
    /// Unpadded alphabets still recognize `=`, unless `=` is one of their symbols.
    #[inline]
    pub fn is_padding(&self, byte: u8) -> bool {
        byte == self.pad.unwrap_or(PAD_BYTE) && !self.is_symbol(byte)
    }
}
