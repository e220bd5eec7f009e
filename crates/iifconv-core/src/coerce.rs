//! Best-effort numeric coercion for IIF field values.
//!
//! Exported files regularly carry grouped numbers (`1,234.50`) and values
//! wrapped in quotes to protect the grouping. The helpers strip those before
//! parsing and return `None` instead of failing. The `_with` variants read
//! numbers written with a non-default [`NumberFormat`].

use crate::format::NumberFormat;

/// Remove group separators and quotes, map the decimal separator to `.`.
fn normalize(text: &str, format: &NumberFormat) -> String {
    text.trim()
        .chars()
        .filter(|c| *c != '"' && Some(*c) != format.group_separator)
        .map(|c| if c == format.decimal_separator { '.' } else { c })
        .collect()
}

/// Parse an integer field. Returns `None` for empty or unparseable input.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    parse_int_with(text, &NumberFormat::default())
}

/// Parse an integer field written with the given separators.
#[must_use]
pub fn parse_int_with(text: &str, format: &NumberFormat) -> Option<i64> {
    if text.is_empty() {
        return None;
    }
    normalize(text, format).trim().parse().ok()
}

/// Parse a decimal field. Returns `None` for empty or unparseable input.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    parse_float_with(text, &NumberFormat::default())
}

/// Parse a decimal field written with the given separators.
#[must_use]
pub fn parse_float_with(text: &str, format: &NumberFormat) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    normalize(text, format).trim().parse().ok()
}
