//! Game errors

use super::SessionId;
use std::fmt;

/// Error type for starting or driving a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A game was requested on a word that is blank after normalization
    EmptyWord,
    /// A random word was requested from a dictionary with no words
    EmptyDictionary,
    /// A random word of this length was requested but none exists
    NoWordOfLength(usize),
    /// Words of this length are shorter than the minimum answer length
    BelowMinLength { length: usize, min_length: usize },
    /// A guess or state read referred to a session that does not exist
    NotStarted(SessionId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Cannot start a game on an empty word"),
            Self::EmptyDictionary => write!(f, "Dictionary has no words to pick from"),
            Self::NoWordOfLength(len) => write!(f, "Dictionary has no {len}-letter words"),
            Self::BelowMinLength { length, min_length } => write!(
                f,
                "A {length}-letter word has no answers of at least {min_length} letters"
            ),
            Self::NotStarted(id) => write!(f, "Game not started (no session {id})"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GameError::NoWordOfLength(7).to_string(),
            "Dictionary has no 7-letter words"
        );
        assert_eq!(
            GameError::BelowMinLength {
                length: 1,
                min_length: 2
            }
            .to_string(),
            "A 1-letter word has no answers of at least 2 letters"
        );
        assert!(
            GameError::NotStarted(SessionId::new(3))
                .to_string()
                .starts_with("Game not started")
        );
    }
}
