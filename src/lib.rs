//! Jumble
//!
//! A word puzzle engine: scramble a word, then find every dictionary word
//! that can be spelled from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::engine::JumbleEngine;
//! use jumble::game::GuessOutcome;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let engine = JumbleEngine::from_words(["cat", "act", "tac", "at", "ta", "dog"]);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let mut session = engine.start(Some("cat"), &mut rng).unwrap();
//! assert_eq!(session.guess("act"), GuessOutcome::Correct);
//! assert_eq!(session.guess("dog"), GuessOutcome::Incorrect);
//! ```

// Letter multisets and normalization
pub mod core;

// Dictionary index, scrambling and subword search
pub mod engine;

// Sessions and the session registry
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
