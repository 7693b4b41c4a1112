//! Formatting utilities for terminal output

/// Lay words out in left-aligned columns no wider than `width` characters
///
/// Every column is as wide as the longest word plus two spaces of padding.
#[must_use]
pub fn word_columns(words: &[&str], width: usize) -> Vec<String> {
    let cell = words.iter().map(|w| w.chars().count()).max().unwrap_or(0) + 2;
    let per_line = (width / cell).max(1);

    words
        .chunks(per_line)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<cell$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
