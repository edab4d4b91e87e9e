//! Format validation for base64 and base64url strings.
//!
//! The patterns only check the symbol set: standard mode allows up to three trailing
//! `=` and neither mode checks the length, so an accepted string may still be rejected
//! by [`try_decode`](crate::try_decode).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::Mode;

const STANDARD_PATTERN: &str = r"^[A-Za-z0-9+/]*={0,3}$";
const URL_PATTERN: &str = r"^[-A-Za-z0-9_]*$";

fn pattern(mode: Mode) -> Option<&'static Regex> {
    static STANDARD_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    static URL_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

    let (cell, source) = match mode {
        Mode::Standard => (&STANDARD_RE, STANDARD_PATTERN),
        Mode::Url => (&URL_RE, URL_PATTERN),
    };
    cell.get_or_init(|| {
        Regex::new(source)
            .inspect_err(|err| warn!(%err, ?mode, "base64 validation pattern failed to compile"))
    })
    .as_ref()
    .ok()
}

/// Checks whether `candidate` looks like base64 (or base64url) encoded data.
///
/// # Example
///
/// ```
/// use cross_base64::{is_valid, Mode};
///
/// assert!(is_valid("SGVsbG8=", Mode::Standard));
/// assert!(is_valid("SGVsbG8", Mode::Url));
/// assert!(!is_valid("SG Vs", Mode::Standard));
/// ```
pub fn is_valid(candidate: &str, mode: Mode) -> bool {
    pattern(mode).is_some_and(|re| re.is_match(candidate))
}

/// Like [`is_valid`], for a dynamically typed value. Anything but a string is invalid.
///
/// # Example
///
/// ```
/// use cross_base64::{is_valid_value, Mode};
/// use serde_json::json;
///
/// assert!(is_valid_value(&json!("SGVsbG8="), Mode::Standard));
/// assert!(!is_valid_value(&json!(123), Mode::Standard));
/// assert!(!is_valid_value(&json!(null), Mode::Url));
/// ```
pub fn is_valid_value(candidate: &Value, mode: Mode) -> bool {
    match candidate {
        Value::String(s) => is_valid(s, mode),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(pattern(Mode::Standard).is_some());
        assert!(pattern(Mode::Url).is_some());
    }

    #[test]
    fn test_patterns_compiled_once() {
        let first = pattern(Mode::Standard).unwrap();
        let second = pattern(Mode::Standard).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(!std::ptr::eq(first, pattern(Mode::Url).unwrap()));
    }

    #[test]
    fn test_standard() {
        assert!(is_valid("", Mode::Standard));
        assert!(is_valid("TWFu", Mode::Standard));
        assert!(is_valid("+/8=", Mode::Standard));
        assert!(is_valid("Zg==", Mode::Standard));
        assert!(!is_valid("-_8", Mode::Standard));
        assert!(!is_valid("Zg==A", Mode::Standard));
        assert!(!is_valid("Zg==\n", Mode::Standard));
    }

    #[test]
    fn test_standard_is_permissive() {
        // Three padding symbols and lengths no encoder produces are accepted.
        assert!(is_valid("Zg===", Mode::Standard));
        assert!(is_valid("Z", Mode::Standard));
        assert!(!is_valid("Zg====", Mode::Standard));
    }

    #[test]
    fn test_url() {
        assert!(is_valid("", Mode::Url));
        assert!(is_valid("-_8", Mode::Url));
        assert!(is_valid("_", Mode::Url));
        assert!(!is_valid("+/8", Mode::Url));
        assert!(!is_valid("Zg==", Mode::Url));
    }

    #[test]
    fn test_non_string_values() {
        for value in [
            Value::Null,
            Value::Bool(true),
            serde_json::json!(123),
            serde_json::json!(["SGVsbG8="]),
            serde_json::json!({ "s": "SGVsbG8=" }),
        ] {
            assert!(!is_valid_value(&value, Mode::Standard));
            assert!(!is_valid_value(&value, Mode::Url));
        }
    }
}
