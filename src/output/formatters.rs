//! Formatting utilities for terminal output

use crate::generator::PlacedWord;

/// Format a grid row as space-separated letters
#[must_use]
pub fn spaced_row(row: &[u8]) -> String {
    let mut result = String::with_capacity(row.len() * 2);
    for (i, &letter) in row.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(char::from(letter));
    }
    result
}

/// Column header for a grid of `size` columns, aligned with [`spaced_row`]
#[must_use]
pub fn column_header(size: usize) -> String {
    (0..size)
        .map(|col| (col % 10).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe where a word was placed, e.g. `KIWI at (3, 4) horizontal`
#[must_use]
pub fn describe_placement(placed: &PlacedWord) -> String {
    format!(
        "{} at {} {}",
        placed.word.text(),
        placed.placement.origin,
        placed.placement.direction
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
