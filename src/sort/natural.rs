//! Natural (numeric-aware) ordering of key strings.

use std::cmp::Ordering;

/// Offset added to every non-digit code point so that character tokens and
/// numeric tokens compare in disjoint ranges of the same unsigned domain.
const CHAR_TOKEN_OFFSET: u64 = 0x1000_0000_0000_0000;

/// Tokenizes a key into an alternating sequence of numeric runs and
/// character code points.
///
/// A run of ASCII digits becomes one token holding its integer value; every
/// other character becomes one token holding its code point plus
/// [`CHAR_TOKEN_OFFSET`]. Returns `None` when a digit run overflows the
/// integer domain, in which case callers fall back to plain lexicographic
/// comparison.
pub fn natural_key(s: &str) -> Option<Vec<u64>> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            if !digits.is_empty() {
                tokens.push(digits.parse::<i64>().ok()? as u64);
                digits.clear();
            }
            tokens.push(c as u64 + CHAR_TOKEN_OFFSET);
        }
    }
    if !digits.is_empty() {
        tokens.push(digits.parse::<i64>().ok()? as u64);
    }
    Some(tokens)
}

/// Compares two keys in natural order.
///
/// Numeric runs compare by value, character runs by code point, and a key
/// whose token sequence is a prefix of the other's sorts first. Keys that
/// fail to tokenize compare lexicographically.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (natural_key(a), natural_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        _ => a.cmp(b),
    }
}
