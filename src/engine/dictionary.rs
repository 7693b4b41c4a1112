//! Dictionary index
//!
//! The immutable set of known words plus the read-only queries the game and
//! the query commands run against it.

use crate::core::{char_len, normalize};
use crate::engine::transform::is_palindrome;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable index over a normalized word collection
///
/// Entries are trimmed, lowercased, non-empty and unique. They are kept both in
/// a hash set for membership and in a sorted vector so every query returns
/// words in alphabetical order.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl DictionaryIndex {
    /// Build an index from any collection of words
    ///
    /// Entries that are blank after normalization are dropped; duplicates
    /// (including ones that differ only by case or padding) collapse.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::DictionaryIndex;
    ///
    /// let dict = DictionaryIndex::new(["Cat", " act ", "", "cat"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("CAT"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lookup: FxHashSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        let mut words: Vec<String> = lookup.iter().cloned().collect();
        words.sort_unstable();

        log::debug!("Indexed {} dictionary words", words.len());

        Self { words, lookup }
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words as a sorted slice
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Membership test, case-insensitive; blank input is never a member
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.lookup.contains(&word)
    }

    /// Every word starting with `prefix`
    ///
    /// A blank prefix matches nothing rather than everything.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }

        // Sorted order puts all matches in one contiguous run
        let start = self.words.partition_point(|w| w.as_str() < prefix.as_str());
        self.words[start..]
            .iter()
            .take_while(|w| w.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    /// Words matching every filter that is present
    ///
    /// - `start_char`: first character, case-insensitive
    /// - `end_char`: last character, case-insensitive
    /// - `length`: exact length in characters
    ///
    /// With all filters absent every word matches.
    #[must_use]
    pub fn search(
        &self,
        start_char: Option<char>,
        end_char: Option<char>,
        length: Option<usize>,
    ) -> Vec<&str> {
        let start_char = start_char.map(fold_char);
        let end_char = end_char.map(fold_char);

        self.iter()
            .filter(|w| start_char.is_none_or(|c| w.chars().next() == Some(c)))
            .filter(|w| end_char.is_none_or(|c| w.chars().next_back() == Some(c)))
            .filter(|w| length.is_none_or(|len| char_len(w) == len))
            .collect()
    }

    /// Uniformly pick one word of exactly `length` characters
    ///
    /// Returns `None` for a zero length or when no word has that length.
    pub fn random_word_of_length<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&str> {
        if length == 0 {
            return None;
        }
        let matching: Vec<&str> = self.iter().filter(|w| char_len(w) == length).collect();
        matching.choose(rng).copied()
    }

    /// Uniformly pick a word with at least `min_length` characters
    ///
    /// Returns `None` when no word is that long (always for an empty dictionary).
    pub fn random_word_at_least<R: Rng + ?Sized>(
        &self,
        min_length: usize,
        rng: &mut R,
    ) -> Option<&str> {
        let eligible: Vec<&str> = self.iter().filter(|w| char_len(w) >= min_length).collect();
        eligible.choose(rng).copied()
    }

    /// Every word longer than one character that reads the same reversed
    #[must_use]
    pub fn palindromes(&self) -> Vec<&str> {
        self.iter().filter(|w| is_palindrome(w)).collect()
    }
}

/// Lowercase a single query character the same way words are normalized
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
