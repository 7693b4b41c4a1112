//! Word transformations
//!
//! Scrambling with a bias away from the identity permutation, palindrome
//! detection, and the letter-spaced display form of a scramble.

use rand::Rng;
use rand::seq::SliceRandom;

/// Upper bound on shuffles tried before accepting one equal to the input
///
/// Words like "aaa" have no differing permutation at all.
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 10;

/// Randomly permute the characters of `word`
///
/// Words of at most one character come back unchanged. Otherwise the first
/// shuffle that differs from `word` (ignoring case) is returned; after
/// [`MAX_SCRAMBLE_ATTEMPTS`] identical shuffles the last one is returned as is.
///
/// # Examples
/// ```
/// use jumble::engine::scramble;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let scrambled = scramble("fusion", &mut rng);
/// assert_ne!(scrambled, "fusion");
/// assert_eq!(scrambled.len(), 6);
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return word.to_string();
    }

    let original = word.to_lowercase();
    let mut scrambled = String::with_capacity(word.len());

    for attempt in 1..=MAX_SCRAMBLE_ATTEMPTS {
        chars.shuffle(rng);
        scrambled = chars.iter().collect();
        if scrambled.to_lowercase() != original {
            return scrambled;
        }
        log::trace!("Scramble attempt {attempt} of '{word}' produced the original");
    }

    log::debug!("No differing permutation of '{word}' after {MAX_SCRAMBLE_ATTEMPTS} attempts");
    scrambled
}

/// True iff `word` has more than one character and reads the same reversed
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars = word.chars();
    if chars.clone().nth(1).is_none() {
        return false;
    }
    chars.clone().eq(chars.rev())
}

/// Letters of `word` separated by single spaces, for display
///
/// ```
/// use jumble::engine::spaced;
///
/// assert_eq!(spaced("nosifu"), "n o s i f u");
/// ```
#[must_use]
pub fn spaced(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCounts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_short_words_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble("", &mut rng), "");
        assert_eq!(scramble("a", &mut rng), "a");
        assert_eq!(scramble("Z", &mut rng), "Z");
    }

    #[test]
    fn scramble_is_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        for word in ["cat", "fusion", "banana", "mississippi", "ab"] {
            for _ in 0..20 {
                let scrambled = scramble(word, &mut rng);
                assert_eq!(scrambled.chars().count(), word.chars().count());
                assert_eq!(LetterCounts::of(&scrambled), LetterCounts::of(word));
            }
        }
    }

    #[test]
    fn scramble_differs_when_possible() {
        let mut rng = StdRng::seed_from_u64(9);
        // Ten failed shuffles of a six-letter word is vanishingly unlikely
        for _ in 0..50 {
            assert_ne!(scramble("fusion", &mut rng), "fusion");
        }
    }

    #[test]
    fn scramble_ignores_case_when_comparing() {
        let mut rng = StdRng::seed_from_u64(17);
        // "Aa" has one other ordering, "aA", which equals it ignoring case
        let scrambled = scramble("Aa", &mut rng);
        assert_eq!(LetterCounts::of(&scrambled), LetterCounts::of("Aa"));
    }

    #[test]
    fn scramble_degenerate_terminates() {
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(scramble("aaa", &mut rng), "aaa");
        assert_eq!(scramble("zzzzzzzz", &mut rng), "zzzzzzzz");
    }

    #[test]
    fn scramble_seeded_is_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(scramble("unison", &mut rng1), scramble("unison", &mut rng2));
    }

    #[test]
    fn palindromes_detected() {
        assert!(is_palindrome("level"));
        assert!(is_palindrome("noon"));
        assert!(is_palindrome("aa"));
        assert!(is_palindrome("racecar"));
    }

    #[test]
    fn non_palindromes_rejected() {
        assert!(!is_palindrome("cat"));
        assert!(!is_palindrome("ab"));
        assert!(!is_palindrome("levels"));
    }

    #[test]
    fn short_words_are_not_palindromes() {
        assert!(!is_palindrome(""));
        assert!(!is_palindrome("a"));
    }

    #[test]
    fn palindrome_matches_reverse_definition() {
        for word in ["civic", "kayak", "refer", "radar", "tenet", "fusion", "abca", "xyx"] {
            let reversed: String = word.chars().rev().collect();
            assert_eq!(is_palindrome(word), reversed == word, "mismatch on '{word}'");
        }
    }

    #[test]
    fn spaced_display() {
        assert_eq!(spaced("cat"), "c a t");
        assert_eq!(spaced("a"), "a");
        assert_eq!(spaced(""), "");
    }
}
