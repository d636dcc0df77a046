//! Scalar string quoting for lossless single-line YAML emission.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Strings that a YAML 1.1 reader would take for booleans.
const BOOL_LIKE: [&str; 6] = ["true", "false", "yes", "no", "on", "off"];

/// Leading characters that force quoting: digits plus YAML indicator
/// characters.
static QUOTE_LEADERS: Lazy<HashSet<char>> =
    Lazy::new(|| "0123456789,!@#%&*|`[]{}".chars().collect());

/// Returns the exact one-line text to emit for a scalar string.
///
/// Unquoted output is the string verbatim. Single-quoted style doubles
/// embedded `'`. Double-quoted style is forced when the string contains
/// carriage return, newline, or tab (or has a leading/trailing tab), since
/// those need backslash escapes; `\` and `"` are escaped first so escapes
/// are not applied twice.
pub fn escape_string(value: &str, always_quote: bool) -> String {
    let mut quote = always_quote;
    let mut double_quote = false;

    if BOOL_LIKE.iter().any(|s| value.eq_ignore_ascii_case(s)) {
        quote = true;
    }

    if value.chars().next().is_some_and(|c| QUOTE_LEADERS.contains(&c)) {
        quote = true;
    }

    if value.contains('"') || value.contains('\'') {
        quote = true;
    }

    if value.contains('\r') || value.contains('\n') || value.contains('\t') {
        quote = true;
        double_quote = true;
    }

    if value.contains('{') || value.contains('}') {
        quote = true;
    }

    if value.starts_with(' ') || value.ends_with(' ') {
        quote = true;
    }

    if value.starts_with('\t') || value.ends_with('\t') {
        quote = true;
        double_quote = true;
    }

    if value.is_empty() {
        quote = true;
    }

    if !quote {
        return value.to_string();
    }

    if double_quote {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\t', "\\t")
            .replace('\n', "\\n")
            .replace('\r', "\\r");
        return format!("\"{}\"", escaped);
    }

    format!("'{}'", value.replace('\'', "''"))
}
