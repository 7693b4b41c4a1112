//! Game session state
//!
//! One puzzle in progress: the original word, its scramble and answer key are
//! fixed at creation; only the set of found words changes afterwards.

use crate::core::normalize;
use crate::engine::spaced;
use std::collections::BTreeSet;
use std::fmt;

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word was found earlier; nothing changed
    AlreadyGuessed,
    /// A valid word, now recorded as found
    Correct,
    /// Not one of the session's valid words; nothing changed
    Incorrect,
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyGuessed => write!(f, "already guessed"),
            Self::Correct => write!(f, "correct"),
            Self::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// One game in progress
///
/// Invariant: `guessed` is always a subset of `valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    original: String,
    scramble: String,
    valid: BTreeSet<String>,
    guessed: BTreeSet<String>,
}

impl GameSession {
    /// Assemble a session from its immutable parts
    ///
    /// Usually called through [`crate::engine::JumbleEngine::start`], which
    /// computes the scramble and valid words. The original and the valid words
    /// are normalized here.
    pub fn new<I, S>(original: impl AsRef<str>, scramble: impl Into<String>, valid_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            original: normalize(original.as_ref()),
            scramble: scramble.into(),
            valid: valid_words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
            guessed: BTreeSet::new(),
        }
    }

    /// The unscrambled source word
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The scrambled letters shown to the player
    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// The scramble with spaces between letters ("t a c")
    #[must_use]
    pub fn scramble_display(&self) -> String {
        spaced(&self.scramble)
    }

    /// All answers, alphabetically
    pub fn valid_words(&self) -> impl Iterator<Item = &str> {
        self.valid.iter().map(String::as_str)
    }

    /// Answers found so far, alphabetically
    pub fn guessed_words(&self) -> impl Iterator<Item = &str> {
        self.guessed.iter().map(String::as_str)
    }

    /// Answers not found yet, alphabetically
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.valid.difference(&self.guessed).map(String::as_str)
    }

    /// True if `word` is one of this game's answers (case-insensitive)
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid.contains(&normalize(word))
    }

    /// True if `word` has already been found (case-insensitive)
    #[must_use]
    pub fn is_guessed(&self, word: &str) -> bool {
        self.guessed.contains(&normalize(word))
    }

    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.guessed.len()
    }

    #[inline]
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.valid.len()
    }

    /// Submit a guess
    ///
    /// The candidate is normalized first. Repeats are reported as
    /// [`GuessOutcome::AlreadyGuessed`] and never counted twice.
    ///
    /// # Examples
    /// ```
    /// use jumble::game::{GameSession, GuessOutcome};
    ///
    /// let mut session = GameSession::new("cat", "tca", ["cat", "act", "at"]);
    /// assert_eq!(session.guess("ACT"), GuessOutcome::Correct);
    /// assert_eq!(session.guess("act"), GuessOutcome::AlreadyGuessed);
    /// assert_eq!(session.guess("dog"), GuessOutcome::Incorrect);
    /// ```
    pub fn guess(&mut self, candidate: &str) -> GuessOutcome {
        let candidate = normalize(candidate);

        if self.guessed.contains(&candidate) {
            GuessOutcome::AlreadyGuessed
        } else if self.valid.contains(&candidate) {
            self.guessed.insert(candidate);
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        }
    }

    /// True once the original word itself has been found
    ///
    /// Never true when the original is not among the valid words (too short,
    /// or not in the dictionary).
    #[must_use]
    pub fn has_found_original(&self) -> bool {
        self.guessed.contains(&self.original)
    }

    /// True once every valid word has been found
    #[must_use]
    pub fn has_found_all(&self) -> bool {
        self.guessed.len() >= self.valid.len()
    }

    /// The win condition: every valid word found
    ///
    /// Finding the original alone is reported separately by
    /// [`Self::has_found_original`].
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_found_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_session() -> GameSession {
        GameSession::new("cat", "tca", ["cat", "act", "tac", "at", "ta"])
    }

    #[test]
    fn new_session_state() {
        let session = cat_session();
        assert_eq!(session.original(), "cat");
        assert_eq!(session.scramble(), "tca");
        assert_eq!(session.scramble_display(), "t c a");
        assert_eq!(session.total_count(), 5);
        assert_eq!(session.found_count(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn valid_words_sorted() {
        let session = cat_session();
        let words: Vec<&str> = session.valid_words().collect();
        assert_eq!(words, vec!["act", "at", "cat", "ta", "tac"]);
    }

    #[test]
    fn correct_guess_recorded() {
        let mut session = cat_session();
        assert_eq!(session.guess("act"), GuessOutcome::Correct);
        assert!(session.is_guessed("act"));
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn repeat_guess_not_double_counted() {
        let mut session = cat_session();
        assert_eq!(session.guess("act"), GuessOutcome::Correct);
        assert_eq!(session.guess("act"), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.guess(" ACT "), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn incorrect_guess_ignored() {
        let mut session = cat_session();
        assert_eq!(session.guess("dog"), GuessOutcome::Incorrect);
        assert_eq!(session.guess("dog"), GuessOutcome::Incorrect);
        assert_eq!(session.guess(""), GuessOutcome::Incorrect);
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut session = cat_session();
        assert_eq!(session.guess("  TaC\n"), GuessOutcome::Correct);
        assert!(session.is_guessed("tac"));
    }

    #[test]
    fn guessed_stays_subset_of_valid() {
        let mut session = cat_session();
        for word in ["cat", "dog", "tact", "at", "cat", "a", "ta"] {
            session.guess(word);
        }
        assert!(session.guessed_words().all(|w| session.is_valid(w)));
        let remaining: Vec<&str> = session.remaining_words().collect();
        assert_eq!(remaining, vec!["act", "tac"]);
    }

    #[test]
    fn found_original_before_all() {
        let mut session = cat_session();
        session.guess("cat");
        assert!(session.has_found_original());
        assert!(!session.has_found_all());
        assert!(!session.is_complete());
    }

    #[test]
    fn complete_after_all_found() {
        let mut session = cat_session();
        for word in ["cat", "act", "tac", "at", "ta"] {
            assert_eq!(session.guess(word), GuessOutcome::Correct);
        }
        assert!(session.has_found_all());
        assert!(session.is_complete());
        assert_eq!(session.remaining_words().count(), 0);
    }

    #[test]
    fn original_outside_valid_set_never_found() {
        let mut session = GameSession::new("a", "a", Vec::<String>::new());
        assert_eq!(session.guess("a"), GuessOutcome::Incorrect);
        assert!(!session.has_found_original());
        // Nothing to find means nothing left to find
        assert!(session.is_complete());
    }

    #[test]
    fn original_is_normalized() {
        let mut session = GameSession::new(" Cat ", "tca", ["cat", "act"]);
        assert_eq!(session.original(), "cat");
        assert_eq!(session.guess("cat"), GuessOutcome::Correct);
        assert!(session.has_found_original());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(GuessOutcome::Correct.to_string(), "correct");
        assert_eq!(GuessOutcome::AlreadyGuessed.to_string(), "already guessed");
        assert!(GuessOutcome::Correct.is_correct());
        assert!(!GuessOutcome::Incorrect.is_correct());
    }
}
