//! Core domain types for Jumble
//!
//! Input normalization and letter multisets. Everything here is pure and has
//! no knowledge of dictionaries or sessions.

mod letters;
mod word;

pub use letters::LetterCounts;
pub use word::{char_len, normalize};
