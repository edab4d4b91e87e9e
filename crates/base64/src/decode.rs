//! Base64 decoding.
//!
//! [`decode`] trusts its input: it never fails, and symbols outside the alphabet decode
//! as 0. Run [`is_valid`](crate::is_valid) first on untrusted input, or use
//! [`try_decode`], which rejects anything an encoder could not have produced.

use tracing::trace;

use crate::alphabet::{Alphabet, Mode, STANDARD, URL};
use crate::Base64Error;

/// Output length of the trusting decoder: `floor(len * 3 / 4)`, minus one for a trailing
/// padding symbol and one more if the symbol before it is padding too.
///
/// # Example
///
/// ```
/// use cross_base64::{decoded_len, STANDARD, URL};
///
/// assert_eq!(decoded_len(b"SGVsbG8=", &STANDARD), 5);
/// assert_eq!(decoded_len(b"SGVsbG8", &URL), 5);
/// ```
pub fn decoded_len(encoded: &[u8], alphabet: &Alphabet) -> usize {
    let mut length = encoded.len() * 3 / 4;
    if let [.., last] = encoded {
        if alphabet.is_padding(*last) {
            length = length.saturating_sub(1);
            if let [.., second_last, _] = encoded {
                if alphabet.is_padding(*second_last) {
                    length = length.saturating_sub(1);
                }
            }
        }
    }
    length
}

/// Fills `buf` from groups of 4 symbols. Positions past the end of `encoded` read as 0
/// and the final group writes only as many bytes as `buf` has room for.
fn decode_groups(encoded: &[u8], buf: &mut [u8], alphabet: &Alphabet) {
    for (group, out) in encoded.chunks(4).zip(buf.chunks_mut(3)) {
        let sextet = |i: usize| group.get(i).map_or(0, |&c| alphabet.value(c));
        let (e1, e2, e3, e4) = (sextet(0), sextet(1), sextet(2), sextet(3));

        let triple = [
            (e1 << 2) | (e2 >> 4),
            ((e2 & 0x0F) << 4) | (e3 >> 2),
            ((e3 & 0x03) << 6) | (e4 & 0x3F),
        ];
        out.copy_from_slice(&triple[..out.len()]);
    }
}

/// Decodes base64 text with the given alphabet, without validating it.
pub fn decode_with(encoded: &str, alphabet: &Alphabet) -> Vec<u8> {
    let encoded = encoded.as_bytes();
    let mut buf = vec![0u8; decoded_len(encoded, alphabet)];
    decode_groups(encoded, &mut buf, alphabet);
    buf
}

/// Decodes base64 text, trusting it to be well formed.
///
/// Malformed input is not detected: symbols outside the alphabet decode as 0 and the
/// output length follows from the input length alone. Length is counted in UTF-8 bytes,
/// so each non-ASCII character counts once per byte.
///
/// # Example
///
/// ```
/// use cross_base64::{decode, Mode};
///
/// assert_eq!(decode("SGVsbG8=", Mode::Standard), b"Hello");
/// assert_eq!(decode("SGVsbG8", Mode::Url), b"Hello");
/// ```
pub fn decode(encoded: &str, mode: Mode) -> Vec<u8> {
    decode_with(encoded, mode.alphabet())
}

/// Decodes base64 text with the given alphabet, rejecting malformed input.
///
/// Accepts input with or without trailing padding. Whatever it accepts decodes to the
/// same bytes as [`decode_with`].
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the length cannot be produced by an
/// encoder and [`Base64Error::InvalidBase64String`] if a symbol is outside the alphabet.
pub fn try_decode_with(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, Base64Error> {
    check(encoded.as_bytes(), alphabet)
        .inspect_err(|err| trace!(%err, length = encoded.len(), "rejected base64 input"))
        .map(|body| {
            let mut buf = vec![0u8; body.len() * 3 / 4];
            decode_groups(body, &mut buf, alphabet);
            buf
        })
}

/// Returns the input with its padding stripped, if it is well formed.
fn check<'a>(encoded: &'a [u8], alphabet: &Alphabet) -> Result<&'a [u8], Base64Error> {
    let padding = encoded
        .iter()
        .rev()
        .take_while(|&&c| alphabet.is_padding(c))
        .count();
    if padding > 2 || (padding > 0 && encoded.len() % 4 != 0) {
        return Err(Base64Error::InvalidLength);
    }

    let body = &encoded[..encoded.len() - padding];
    if body.len() % 4 == 1 {
        return Err(Base64Error::InvalidLength);
    }
    if !body.iter().all(|&c| alphabet.is_symbol(c)) {
        return Err(Base64Error::InvalidBase64String);
    }
    Ok(body)
}

/// Decodes base64 text, rejecting malformed input.
///
/// # Errors
///
/// See [`try_decode_with`].
///
/// # Example
///
/// ```
/// use cross_base64::{try_decode, Base64Error, Mode};
///
/// assert_eq!(try_decode("SGVsbG8=", Mode::Standard).unwrap(), b"Hello");
/// assert_eq!(try_decode("SG Vsb==", Mode::Standard), Err(Base64Error::InvalidBase64String));
/// assert_eq!(try_decode("SG Vs", Mode::Standard), Err(Base64Error::InvalidLength));
/// ```
pub fn try_decode(encoded: &str, mode: Mode) -> Result<Vec<u8>, Base64Error> {
    try_decode_with(encoded, mode.alphabet())
}

/// Decodes a standard base64 string, with or without padding.
///
/// # Example
///
/// ```
/// use cross_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    try_decode_with(encoded, &STANDARD)
}

/// Decodes a URL-safe base64 string, with or without padding.
///
/// # Example
///
/// ```
/// use cross_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    try_decode_with(encoded, &URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_len() {
        assert_eq!(decoded_len(b"", &STANDARD), 0);
        assert_eq!(decoded_len(b"Zg==", &STANDARD), 1);
        assert_eq!(decoded_len(b"Zm8=", &STANDARD), 2);
        assert_eq!(decoded_len(b"Zm9v", &STANDARD), 3);
        assert_eq!(decoded_len(b"Zg", &URL), 1);
        assert_eq!(decoded_len(b"Zm8", &URL), 2);
    }

    #[test]
    fn test_decoded_len_saturates() {
        assert_eq!(decoded_len(b"=", &STANDARD), 0);
        assert_eq!(decoded_len(b"==", &STANDARD), 0);
    }

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode("", Mode::Standard), b"");
        assert_eq!(decode("Zg==", Mode::Standard), b"f");
        assert_eq!(decode("Zm8=", Mode::Standard), b"fo");
        assert_eq!(decode("Zm9vYmFy", Mode::Standard), b"foobar");
        assert_eq!(decode("-_8", Mode::Url), [0xFB, 0xFF]);
        assert_eq!(decode("+/8=", Mode::Standard), [0xFB, 0xFF]);
    }

    #[test]
    fn test_decode_unknown_symbols_as_zero() {
        // '!' looks up as 0, same as 'A'.
        assert_eq!(decode("!!!!", Mode::Standard), decode("AAAA", Mode::Standard));
        // URL symbols are unknown to the standard alphabet.
        assert_eq!(decode("-_8", Mode::Standard), [0x00, 0x0F]);
    }

    #[test]
    fn test_check() {
        assert_eq!(check(b"Zg==", &STANDARD), Ok(&b"Zg"[..]));
        assert_eq!(check(b"Zg", &STANDARD), Ok(&b"Zg"[..]));
        assert_eq!(check(b"Zg=", &STANDARD), Err(Base64Error::InvalidLength));
        assert_eq!(check(b"Z===", &STANDARD), Err(Base64Error::InvalidLength));
        assert_eq!(check(b"Zm9vY", &STANDARD), Err(Base64Error::InvalidLength));
        assert_eq!(check(b"Zm=v", &STANDARD), Err(Base64Error::InvalidBase64String));
        assert_eq!(check(b"Zm9v-_", &STANDARD), Err(Base64Error::InvalidBase64String));
        assert_eq!(check(b"SG Vsb==", &STANDARD), Err(Base64Error::InvalidBase64String));
    }

    #[test]
    fn test_decode_counts_input_bytes() {
        // 'é' is two UTF-8 bytes: floor(2 * 3 / 4) = 1.
        assert_eq!(decode("é", Mode::Standard).len(), 1);
    }
}
