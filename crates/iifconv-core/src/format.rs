//! Numeric rendering for IIF output.
//!
//! Separators are explicit configuration instead of the process locale, so
//! the same document always serializes to the same bytes.

/// Number formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator between the integer and fractional part (default: `.`).
    pub decimal_separator: char,
    /// Thousands separator, or `None` to disable grouping (default: `,`).
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }
}

impl NumberFormat {
    /// Create a format with the given separators.
    #[must_use]
    pub const fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }
}

/// Rendering of an absent money value.
pub const ZERO_MONEY: &str = "0.00";

/// Format a money amount with two decimals and grouped thousands.
///
/// Amounts of 1000 or more in magnitude are wrapped in double quotes so a
/// downstream reader cannot mistake the group separator for a delimiter.
#[must_use]
pub fn format_money(value: Option<f64>, config: &NumberFormat) -> String {
    let Some(value) = value else {
        return ZERO_MONEY.to_string();
    };
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{value:.2}");
    let (negative, digits) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut out = String::with_capacity(fixed.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, config.group_separator));
    out.push(config.decimal_separator);
    out.push_str(frac_part);

    if value.abs() >= 1000.0 {
        format!("\"{out}\"")
    } else {
        out
    }
}

/// Format a float as plain decimal text (`150.0`, `-12.25`).
#[must_use]
pub fn format_plain(value: f64) -> String {
    format!("{value:?}")
}

fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
