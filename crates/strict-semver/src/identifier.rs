//! Dot-separated identifier grammar shared by pre-release and build metadata

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

/// One or more non-empty `[0-9A-Za-z-]` tokens joined by single dots
pub(crate) const IDENTIFIERS_PATTERN: &str = r"(?:[0-9A-Za-z-]+\.)*[0-9A-Za-z-]+";

lazy_static! {
    static ref IDENTIFIERS_RE: Regex = Regex::new(&format!("^{}$", IDENTIFIERS_PATTERN)).unwrap();
}

/// Check that `value` is a dot-separated list of identifiers.
///
/// Empty identifiers (leading, trailing or doubled dots) are rejected, as is
/// anything outside ASCII letters, digits and hyphen.
pub(crate) fn is_valid_identifiers(value: &str) -> bool {
    IDENTIFIERS_RE.is_match(value)
}

/// An identifier is numeric when it is made only of ASCII digits.
///
/// Leading zeros do not make an identifier alphanumeric: `01` is numeric.
pub(crate) fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit strings by integer value without parsing them.
pub(crate) fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare a single pair of pre-release identifiers.
///
/// Numeric identifiers always sort below alphanumeric ones, numeric pairs
/// compare by value and alphanumeric pairs compare byte-wise.
pub(crate) fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => compare_numeric(a, b),
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}
