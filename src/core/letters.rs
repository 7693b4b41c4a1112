//! Letter multisets
//!
//! A [`LetterCounts`] maps each character of a word to how often it occurs.
//! The sub-multiset test ([`LetterCounts::covers`]) decides whether one word
//! can be spelled from the letters of another.

use rustc_hash::FxHashMap;

/// Occurrence count of every character in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterCounts {
    /// Count the characters of `word` as given
    ///
    /// Callers normalize first; counting is exact on whatever characters arrive.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("speed");
    /// assert_eq!(counts.get('e'), 2);
    /// assert_eq!(counts.get('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True iff every letter of `other` is available here at least as many times
    ///
    /// This is pointwise domination: `other` is a sub-multiset of `self`.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterCounts;
    ///
    /// let source = LetterCounts::of("cat");
    /// assert!(source.covers(&LetterCounts::of("act")));
    /// assert!(!source.covers(&LetterCounts::of("tact")));
    /// ```
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        if other.total > self.total {
            return false;
        }
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.get(letter) >= needed)
    }

    /// Check whether `word` can be spelled from these letters without counting it first
    ///
    /// Equivalent to `self.covers(&LetterCounts::of(word))`, but bails out at the
    /// first letter that runs short.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut used: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            let slot = used.entry(ch).or_insert(0);
            *slot += 1;
            if *slot > self.get(ch) {
                return false;
            }
        }
        true
    }
}
