//! Main Jumble engine interface

use super::{DictionaryIndex, scramble, subwords_of};
use crate::core::normalize;
use crate::game::{GameError, GameSession};
use rand::Rng;

/// Shortest word accepted as an answer unless configured otherwise
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Answers shorter than this are left out of a game's valid words
    pub min_length: usize,
}

impl EngineConfig {
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

/// Main Jumble engine
///
/// Owns the dictionary and starts games against it. The engine holds no game
/// state and no random generator; both are owned by the caller, so one engine
/// can serve any number of sessions.
#[derive(Debug, Clone)]
pub struct JumbleEngine {
    dictionary: DictionaryIndex,
    config: EngineConfig,
}

impl JumbleEngine {
    /// Create an engine over an already built dictionary
    #[must_use]
    pub const fn new(dictionary: DictionaryIndex, config: EngineConfig) -> Self {
        Self { dictionary, config }
    }

    /// Build the dictionary from raw words and use the default configuration
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(DictionaryIndex::new(words), EngineConfig::default())
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Start a new game
    ///
    /// With `Some(word)` that word becomes the original; it is normalized but
    /// not checked against the dictionary. With `None` a random dictionary word
    /// of at least the configured minimum length is used, so the game always
    /// has the original itself as an answer. The valid words are resolved from
    /// the scramble's letters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the given word is blank (`GameError::EmptyWord`)
    /// - no word was given and the dictionary has no word of at least the minimum
    ///   length (`GameError::EmptyDictionary`)
    pub fn start<R: Rng + ?Sized>(
        &self,
        word: Option<&str>,
        rng: &mut R,
    ) -> Result<GameSession, GameError> {
        let original = match word {
            Some(word) => {
                let word = normalize(word);
                if word.is_empty() {
                    return Err(GameError::EmptyWord);
                }
                word
            }
            None => self
                .dictionary
                .random_word_at_least(self.config.min_length, rng)
                .ok_or(GameError::EmptyDictionary)?
                .to_string(),
        };

        Ok(self.start_with(original, rng))
    }

    /// Start a new game on a random word of exactly `length` characters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `length` is below the minimum answer length, so the game could have no
    ///   answers (`GameError::BelowMinLength`)
    /// - the dictionary has no such word (`GameError::NoWordOfLength`)
    pub fn start_with_length<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<GameSession, GameError> {
        if length < self.config.min_length {
            return Err(GameError::BelowMinLength {
                length,
                min_length: self.config.min_length,
            });
        }

        let original = self
            .dictionary
            .random_word_of_length(length, rng)
            .ok_or(GameError::NoWordOfLength(length))?
            .to_string();

        Ok(self.start_with(original, rng))
    }

    fn start_with<R: Rng + ?Sized>(&self, original: String, rng: &mut R) -> GameSession {
        let scrambled = scramble(&original, rng);
        let valid_words = subwords_of(&self.dictionary, &scrambled, self.config.min_length);

        log::info!(
            "New game: {} letters, {} valid words",
            original.chars().count(),
            valid_words.len()
        );

        GameSession::new(original, scrambled, valid_words)
    }
}
