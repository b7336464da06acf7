//! Error types for the session engine and its persistence layer

use crate::core::WordError;
use crate::session::{GameState, UserId};
use thiserror::Error;

/// Errors raised by a session store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store data is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors returned by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Guess is not exactly 5 ASCII letters
    #[error("invalid guess '{guess}': {source}")]
    InvalidGuessFormat {
        guess: String,
        #[source]
        source: WordError,
    },

    /// Guess is well-formed but not in the dictionary
    #[error("not a valid word: '{0}'")]
    UnknownWord(String),

    /// The session is already won or lost
    #[error("game is over ({state}); start a new game")]
    SessionTerminal { state: GameState },

    /// The user has no session to play or render
    #[error("no game found for user {0}")]
    NoActiveSession(UserId),

    /// A forced answer is not part of the dictionary
    #[error("answer '{0}' is not in the dictionary")]
    AnswerNotInDictionary(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl SessionError {
    /// True for rejections caused by player input or game state, as opposed to
    /// storage failures
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SessionError::UnknownWord("QWERT".into());
        assert_eq!(err.to_string(), "not a valid word: 'QWERT'");

        let err = SessionError::SessionTerminal {
            state: GameState::Won,
        };
        assert_eq!(err.to_string(), "game is over (won); start a new game");

        let err = SessionError::InvalidGuessFormat {
            guess: "abc".into(),
            source: WordError::InvalidLength(3),
        };
        assert_eq!(
            err.to_string(),
            "invalid guess 'abc': Word must be exactly 5 letters, got 3"
        );

        let err = SessionError::NoActiveSession(UserId::new("alice"));
        assert_eq!(err.to_string(), "no game found for user alice");
    }

    #[test]
    fn storage_errors_are_not_rejected_input() {
        let io = std::io::Error::other("disk full");
        let err = SessionError::from(StoreError::from(io));
        assert!(!err.is_rejected_input());
        assert!(SessionError::UnknownWord("QWERT".into()).is_rejected_input());
    }
}
