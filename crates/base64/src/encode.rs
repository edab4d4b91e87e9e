//! Base64 encoding.

use crate::alphabet::{Alphabet, Mode, STANDARD, URL};

/// Number of symbols produced when encoding `length` bytes.
///
/// Padded output is `4 * ceil(length / 3)`, unpadded output is `ceil(length * 4 / 3)`.
pub fn encoded_len(length: usize, padded: bool) -> usize {
    let full = length / 3 * 4;
    match length % 3 {
        0 => full,
        _ if padded => full + 4,
        extra => full + extra + 1,
    }
}

/// Encodes bytes into a destination byte slice.
///
/// # Arguments
///
/// * `data` - The bytes to encode.
/// * `dest` - The destination byte slice.
/// * `offset` - The starting offset in the destination slice.
///
/// # Returns
///
/// The offset just past the last symbol written.
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + encoded_len(data.len(), padded)` bytes.
///
/// # Example
///
/// ```
/// use cross_base64::{encode_to_slice, STANDARD};
///
/// let mut dest = vec![0u8; 100];
/// let end = encode_to_slice(b"hello", &mut dest, 10, &STANDARD);
/// assert_eq!(&dest[10..end], b"aGVsbG8=");
/// ```
pub fn encode_to_slice(data: &[u8], dest: &mut [u8], mut offset: usize, alphabet: &Alphabet) -> usize {
    let extra_length = data.len() % 3;
    let base_length = data.len() - extra_length;

    for group in data[..base_length].chunks_exact(3) {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        dest[offset] = alphabet.symbol(o1 >> 2);
        dest[offset + 1] = alphabet.symbol(((o1 & 0x03) << 4) | (o2 >> 4));
        dest[offset + 2] = alphabet.symbol(((o2 & 0x0F) << 2) | (o3 >> 6));
        dest[offset + 3] = alphabet.symbol(o3 & 0x3F);
        offset += 4;
    }

    if extra_length == 1 {
        let o1 = data[base_length];
        dest[offset] = alphabet.symbol(o1 >> 2);
        dest[offset + 1] = alphabet.symbol((o1 & 0x03) << 4);
        offset += 2;

        if let Some(pad) = alphabet.pad() {
            dest[offset] = pad;
            dest[offset + 1] = pad;
            offset += 2;
        }
    } else if extra_length == 2 {
        let o1 = data[base_length];
        let o2 = data[base_length + 1];
        dest[offset] = alphabet.symbol(o1 >> 2);
        dest[offset + 1] = alphabet.symbol(((o1 & 0x03) << 4) | (o2 >> 4));
        dest[offset + 2] = alphabet.symbol((o2 & 0x0F) << 2);
        offset += 3;

        if let Some(pad) = alphabet.pad() {
            dest[offset] = pad;
            offset += 1;
        }
    }

    offset
}

/// Encodes a byte slice with the given alphabet.
pub fn encode_with(data: &[u8], alphabet: &Alphabet) -> String {
    let mut buf = vec![0u8; encoded_len(data.len(), alphabet.pad().is_some())];
    let written = encode_to_slice(data, &mut buf, 0, alphabet);
    debug_assert_eq!(written, buf.len());
    // Alphabet symbols and padding are ASCII.
    buf.into_iter().map(char::from).collect()
}

/// Encodes a byte slice to base64 text.
///
/// Never fails; empty input encodes to an empty string.
///
/// # Example
///
/// ```
/// use cross_base64::{encode, Mode};
///
/// assert_eq!(encode(b"Man", Mode::Standard), "TWFu");
/// assert_eq!(encode(b"Hello", Mode::Standard), "SGVsbG8=");
/// assert_eq!(encode(b"Hello", Mode::Url), "SGVsbG8");
/// ```
pub fn encode(data: &[u8], mode: Mode) -> String {
    encode_with(data, mode.alphabet())
}

/// Encodes a byte slice to a standard base64 string with padding.
///
/// # Example
///
/// ```
/// use cross_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    encode_with(data, &STANDARD)
}

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use cross_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(data: &[u8]) -> String {
    encode_with(data, &URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(to_base64_url(b""), "");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_symbols() {
        assert_eq!(to_base64(&[0xFB, 0xFF]), "+/8=");
        assert_eq!(to_base64_url(&[0xFB, 0xFF]), "-_8");
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0, true), 0);
        assert_eq!(encoded_len(1, true), 4);
        assert_eq!(encoded_len(2, true), 4);
        assert_eq!(encoded_len(3, true), 4);
        assert_eq!(encoded_len(4, true), 8);
        assert_eq!(encoded_len(0, false), 0);
        assert_eq!(encoded_len(1, false), 2);
        assert_eq!(encoded_len(2, false), 3);
        assert_eq!(encoded_len(3, false), 4);
        assert_eq!(encoded_len(5, false), 7);
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = to_base64(&data);
        assert_eq!(encoded.len(), encoded_len(data.len(), true));
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }
}
