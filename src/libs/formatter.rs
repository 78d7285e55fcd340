//! Number and string formatting for console output and exports.
//!
//! - [`format_count`] groups digits in threes: `486720` → `486,720`.
//! - [`display_pattern`] shows the empty binary string as `(empty)`.
//! - [`numbered`] renders `1. value` lines used by text exports.

use std::fmt::Display;

/// Placeholder printed for the empty binary string.
pub const EMPTY_PATTERN: &str = "(empty)";

/// Formats an unsigned count with `,` thousands separators.
///
/// Accepts anything that displays as plain decimal digits, including
/// [`num_bigint::BigUint`].
///
/// ```rust
/// use pwlab::libs::formatter::format_count;
///
/// assert_eq!(format_count(486_720u64), "486,720");
/// assert_eq!(format_count(13u32), "13");
/// ```
pub fn format_count<T: Display>(value: T) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Returns `s`, or [`EMPTY_PATTERN`] when `s` is empty.
pub fn display_pattern(s: &str) -> &str {
    if s.is_empty() {
        EMPTY_PATTERN
    } else {
        s
    }
}

/// Renders items as `1. item` lines, one per entry.
pub fn numbered<T: Display>(items: &[T]) -> Vec<String> {
    items.iter().enumerate().map(|(i, item)| format!("{}. {}", i + 1, item)).collect()
}
