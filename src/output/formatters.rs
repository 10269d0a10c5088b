//! Formatting utilities for result rows

use crate::finder::Transform;

/// Width of each result column
pub const COLUMN_WIDTH: usize = 21;

/// Left-justify `text` to `width` characters
///
/// Longer text is returned whole, never truncated.
#[must_use]
pub fn pad_column(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Format a transform as one aligned row: pattern, from-word, to-word
#[must_use]
pub fn format_row(transform: &Transform) -> String {
    format!(
        "{} {} {}",
        pad_column(&transform.pattern, COLUMN_WIDTH),
        pad_column(&transform.from, COLUMN_WIDTH),
        transform.to
    )
}
