//! Session registry
//!
//! Request/response callers (a web handler, a bot) cannot hold a
//! [`GameSession`] between calls. The registry keeps sessions keyed by an
//! issued [`SessionId`] instead of a single process-wide "current game".

use super::{GameError, GameSession, GuessOutcome};
use crate::core::normalize;
use crate::engine::JumbleEngine;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Word used when a new game is requested without one
pub const DEFAULT_WORD: &str = "fusion";

/// Opaque handle to a registered session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of a session, as returned to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub id: SessionId,
    pub original: String,
    pub scramble: String,
    pub scramble_display: String,
    pub guessed: Vec<String>,
    pub found: usize,
    pub total: usize,
    pub complete: bool,
}

impl SessionState {
    fn capture(id: SessionId, session: &GameSession) -> Self {
        Self {
            id,
            original: session.original().to_string(),
            scramble: session.scramble().to_string(),
            scramble_display: session.scramble_display(),
            guessed: session.guessed_words().map(str::to_string).collect(),
            found: session.found_count(),
            total: session.total_count(),
            complete: session.is_complete(),
        }
    }
}

/// Result of a guess made through the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// The guess after normalization
    pub guess: String,
    pub outcome: GuessOutcome,
    /// Session state after the guess was applied
    pub state: SessionState,
}

/// Thread-safe map from session id to game
///
/// All sessions sit behind one lock, which makes each guess's
/// check-then-record step atomic with respect to other callers.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    next_id: AtomicU64,
    sessions: Mutex<FxHashMap<SessionId, GameSession>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<SessionId, GameSession>> {
        // Every mutation under this lock is a single insert, so poisoned data is still consistent
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a game and register it under a fresh id
    ///
    /// `None` starts a game on [`DEFAULT_WORD`].
    ///
    /// # Errors
    ///
    /// Propagates errors from [`JumbleEngine::start`].
    pub fn new_game<R: Rng + ?Sized>(
        &self,
        engine: &JumbleEngine,
        word: Option<&str>,
        rng: &mut R,
    ) -> Result<SessionState, GameError> {
        let session = engine.start(Some(word.unwrap_or(DEFAULT_WORD)), rng)?;
        Ok(self.insert(session))
    }

    /// Register an already started session
    pub fn insert(&self, session: GameSession) -> SessionState {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let state = SessionState::capture(id, &session);
        self.lock().insert(id, session);
        log::info!("Registered session {id}");
        state
    }

    /// Submit a guess to a session
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` if `id` is unknown.
    pub fn guess(&self, id: SessionId, candidate: &str) -> Result<GuessReport, GameError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or(GameError::NotStarted(id))?;

        let outcome = session.guess(candidate);
        log::debug!("Session {id}: guess {outcome}");

        Ok(GuessReport {
            guess: normalize(candidate),
            outcome,
            state: SessionState::capture(id, session),
        })
    }

    /// Current state of a session
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` if `id` is unknown.
    pub fn state(&self, id: SessionId) -> Result<SessionState, GameError> {
        self.lock()
            .get(&id)
            .map(|session| SessionState::capture(id, session))
            .ok_or(GameError::NotStarted(id))
    }

    /// Discard a session; returns whether it existed
    pub fn end(&self, id: SessionId) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            log::info!("Ended session {id}");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
