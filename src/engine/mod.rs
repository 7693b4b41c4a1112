//! Word-analysis engine
//!
//! Dictionary indexing, scrambling, palindrome detection and subword
//! resolution, plus the [`JumbleEngine`] that ties them together to start games.

mod dictionary;
mod jumble;
mod subwords;
mod transform;

pub use dictionary::DictionaryIndex;
pub use self::jumble::{DEFAULT_MIN_LENGTH, EngineConfig, JumbleEngine};
pub use subwords::{is_spellable_from, subwords_of};
pub use transform::{MAX_SCRAMBLE_ATTEMPTS, is_palindrome, scramble, spaced};
