//! Word analysis command
//!
//! Reports everything the engine knows about a single word.

use crate::core::normalize;
use crate::engine::{JumbleEngine, is_palindrome, scramble, subwords_of};
use crate::game::GameError;
use rand::Rng;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub in_dictionary: bool,
    pub is_palindrome: bool,
    pub scramble: String,
    /// Dictionary words spellable from the word, alphabetically
    pub subwords: Vec<String>,
    pub min_length: usize,
}

impl AnalysisResult {
    /// The longest subwords (all ties), alphabetically
    #[must_use]
    pub fn longest(&self) -> Vec<&str> {
        let max = self.subwords.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        self.subwords
            .iter()
            .filter(|w| w.chars().count() == max)
            .map(String::as_str)
            .collect()
    }
}

/// Analyze `word` against the engine's dictionary
///
/// # Errors
///
/// Returns `GameError::EmptyWord` if the word is blank.
pub fn analyze_word<R: Rng + ?Sized>(
    engine: &JumbleEngine,
    word: &str,
    rng: &mut R,
) -> Result<AnalysisResult, GameError> {
    let word = normalize(word);
    if word.is_empty() {
        return Err(GameError::EmptyWord);
    }

    let dictionary = engine.dictionary();
    let min_length = engine.config().min_length;

    Ok(AnalysisResult {
        in_dictionary: dictionary.contains(&word),
        is_palindrome: is_palindrome(&word),
        scramble: scramble(&word, rng),
        subwords: subwords_of(dictionary, &word, min_length)
            .into_iter()
            .map(str::to_string)
            .collect(),
        min_length,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> JumbleEngine {
        JumbleEngine::from_words(["level", "eel", "eve", "lee", "cat", "act"])
    }

    #[test]
    fn analyze_palindrome() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = analyze_word(&engine(), "LEVEL", &mut rng).unwrap();

        assert_eq!(result.word, "level");
        assert!(result.in_dictionary);
        assert!(result.is_palindrome);
        assert_eq!(result.subwords, vec!["eel", "eve", "lee", "level"]);
        assert_eq!(result.longest(), vec!["level"]);
        assert_eq!(result.min_length, 2);
    }

    #[test]
    fn analyze_unknown_word() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = analyze_word(&engine(), "tacit", &mut rng).unwrap();

        assert!(!result.in_dictionary);
        assert!(!result.is_palindrome);
        assert_eq!(result.subwords, vec!["act", "cat"]);
        assert_eq!(result.longest(), vec!["act", "cat"]);
        assert_eq!(result.scramble.len(), 5);
    }

    #[test]
    fn analyze_blank_is_error() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            analyze_word(&engine(), "  ", &mut rng),
            Err(GameError::EmptyWord)
        ));
    }

    #[test]
    fn longest_of_nothing_is_empty() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = analyze_word(&engine(), "xyz", &mut rng).unwrap();
        assert!(result.subwords.is_empty());
        assert!(result.longest().is_empty());
    }
}
