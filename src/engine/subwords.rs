//! Subword resolution
//!
//! Finds every dictionary word that can be spelled from the letters of a
//! source word. This is the answer key of a puzzle, so it must agree exactly
//! with a letter-by-letter check of any single guess.

use super::DictionaryIndex;
use crate::core::{LetterCounts, char_len, normalize};
use rayon::prelude::*;

/// Every dictionary word spellable from `source`'s letters with at least `min_length` characters
///
/// A candidate qualifies when each of its letters occurs in it no more often
/// than in `source` (case-insensitive). A blank source or a `min_length` of
/// zero yields nothing. Results are in alphabetical order.
///
/// # Examples
/// ```
/// use jumble::engine::{DictionaryIndex, subwords_of};
///
/// let dict = DictionaryIndex::new(["cat", "act", "at", "a", "dog"]);
/// assert_eq!(subwords_of(&dict, "tac", 2), vec!["act", "at", "cat"]);
/// ```
#[must_use]
pub fn subwords_of<'d>(dictionary: &'d DictionaryIndex, source: &str, min_length: usize) -> Vec<&'d str> {
    let source = normalize(source);
    if source.is_empty() || min_length == 0 {
        return Vec::new();
    }

    let available = LetterCounts::of(&source);
    let max_length = available.total();

    // Collecting a rayon iterator preserves the sorted dictionary order
    let found: Vec<&str> = dictionary
        .words()
        .par_iter()
        .map(String::as_str)
        .filter(|candidate| {
            let len = char_len(candidate);
            len >= min_length && len <= max_length && available.can_spell(candidate)
        })
        .collect();

    log::debug!(
        "Resolved {} subwords of '{source}' (min length {min_length})",
        found.len()
    );
    found
}

/// True iff `candidate` passes the same test [`subwords_of`] applies, minus dictionary membership
///
/// Front ends can use this to explain why a rejected guess was rejected.
#[must_use]
pub fn is_spellable_from(source: &str, candidate: &str, min_length: usize) -> bool {
    let source = normalize(source);
    let candidate = normalize(candidate);
    !candidate.is_empty()
        && min_length > 0
        && char_len(&candidate) >= min_length
        && LetterCounts::of(&source).covers(&LetterCounts::of(&candidate))
}
