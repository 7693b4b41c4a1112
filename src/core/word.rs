//! Word normalization
//!
//! Every value that enters the engine (dictionary entries, queries, guesses,
//! source words) passes through [`normalize`] first, so letter comparisons
//! elsewhere never have to think about case or padding.

/// Normalize a word for storage or lookup: trim surrounding whitespace, then lowercase.
///
/// An input that normalizes to the empty string is treated as absent by callers.
///
/// # Examples
/// ```
/// use jumble::core::normalize;
///
/// assert_eq!(normalize("  Fusion\n"), "fusion");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Length of a word in characters (not bytes)
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
