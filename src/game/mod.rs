//! Game state
//!
//! A single puzzle in progress ([`GameSession`]) and the id-keyed
//! [`SessionRegistry`] for callers that drive many games.

mod error;
mod registry;
mod session;

pub use error::GameError;
pub use registry::{DEFAULT_WORD, GuessReport, SessionId, SessionRegistry, SessionState};
pub use session::{GameSession, GuessOutcome};
