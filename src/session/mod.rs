//! Wordle sessions
//!
//! [`WordleSession`] is the per-user state machine; [`SessionEngine`] wraps it
//! with answer selection, per-user locking and persistence.

mod engine;
mod state;
mod stats;

pub use engine::{PlayOutcome, SessionEngine};
pub use state::{GameState, GuessRecord, SessionId, Turn, UserId, WordleSession};
pub use stats::PlayerStats;
