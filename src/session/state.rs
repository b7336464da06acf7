//! Wordle session state machine
//!
//! A session advances by exactly one accepted guess at a time. It starts
//! in progress, becomes won the moment a guess equals the answer, and becomes
//! lost when the fifth guess misses. Won and lost sessions accept nothing.

use crate::core::{Board, MAX_ROUNDS, Word};
use crate::error::SessionError;
use crate::wordlists::Dictionary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque, stable identifier of a player
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a stored session; later sessions get larger ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[serde(rename = "busy")]
    InProgress,
    #[serde(rename = "win")]
    Won,
    #[serde(rename = "loss")]
    Lost,
}

impl GameState {
    /// Won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A guess and the round (1-5) it was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub round: u8,
    pub word: Word,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub state: GameState,
    pub board: Board,
}

/// One user's playthrough of the game
///
/// Stored rows are checked on load; a row whose round, guesses and state
/// disagree is refused instead of being played on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct WordleSession {
    id: SessionId,
    user_id: UserId,
    answer: Word,
    round: u8,
    guesses: Vec<GuessRecord>,
    state: GameState,
    win_round: Option<u8>,
    /// Answer was chosen by the player rather than drawn at random
    practice: bool,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Why a stored session row was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionDataError {
    #[error("round {round} does not match {guesses} recorded guesses")]
    RoundMismatch { round: u8, guesses: usize },
    #[error("guess {position} is recorded for round {round}")]
    GuessOutOfOrder { position: usize, round: u8 },
    #[error("guesses continue after the game was won in round {round}")]
    PlayedAfterWin { round: usize },
    #[error("stored state {stored:?}/{stored_win_round:?} should be {expected:?}/{expected_win_round:?}")]
    StateMismatch {
        stored: GameState,
        stored_win_round: Option<u8>,
        expected: GameState,
        expected_win_round: Option<u8>,
    },
}

/// Unchecked on-disk shape of a session
#[derive(Deserialize)]
struct RawSession {
    id: SessionId,
    user_id: UserId,
    answer: Word,
    round: u8,
    guesses: Vec<GuessRecord>,
    state: GameState,
    win_round: Option<u8>,
    #[serde(default)]
    practice: bool,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RawSession> for WordleSession {
    type Error = SessionDataError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let played = raw.guesses.len();
        if usize::from(raw.round) != played || played > MAX_ROUNDS {
            return Err(SessionDataError::RoundMismatch {
                round: raw.round,
                guesses: played,
            });
        }

        if let Some((position, guess)) = raw
            .guesses
            .iter()
            .enumerate()
            .find(|(i, g)| usize::from(g.round) != i + 1)
        {
            return Err(SessionDataError::GuessOutOfOrder {
                position,
                round: guess.round,
            });
        }

        let (expected, expected_win_round) =
            match raw.guesses.iter().position(|g| g.word == raw.answer) {
                Some(i) if i + 1 == played => (GameState::Won, Some(raw.round)),
                Some(i) => return Err(SessionDataError::PlayedAfterWin { round: i + 1 }),
                None if played == MAX_ROUNDS => (GameState::Lost, None),
                None => (GameState::InProgress, None),
            };
        if raw.state != expected || raw.win_round != expected_win_round {
            return Err(SessionDataError::StateMismatch {
                stored: raw.state,
                stored_win_round: raw.win_round,
                expected,
                expected_win_round,
            });
        }

        Ok(Self {
            id: raw.id,
            user_id: raw.user_id,
            answer: raw.answer,
            round: raw.round,
            guesses: raw.guesses,
            state: raw.state,
            win_round: raw.win_round,
            practice: raw.practice,
            started_at: raw.started_at,
            updated_at: raw.updated_at,
        })
    }
}

impl WordleSession {
    /// Fresh in-progress session with no guesses
    #[must_use]
    pub fn new(id: SessionId, user_id: UserId, answer: Word) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            answer,
            round: 0,
            guesses: Vec::with_capacity(MAX_ROUNDS),
            state: GameState::InProgress,
            win_round: None,
            practice: false,
            started_at: now,
            updated_at: now,
        }
    }

    /// Fresh session whose answer was picked by the player
    #[must_use]
    pub fn practice(id: SessionId, user_id: UserId, answer: Word) -> Self {
        Self {
            practice: true,
            ..Self::new(id, user_id, answer)
        }
    }

    /// Evaluate one guess and advance the session by one round
    ///
    /// The guess is normalized to uppercase and must be a dictionary word.
    /// Rejected guesses leave the session untouched.
    ///
    /// # Errors
    ///
    /// - `SessionTerminal` if the session is already won or lost
    /// - `InvalidGuessFormat` if the guess is not 5 ASCII letters
    /// - `UnknownWord` if the guess is not in `dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::Word;
    /// use wordle_session::session::{GameState, SessionId, UserId, WordleSession};
    /// use wordle_session::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "solar", "tower"]).unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let mut session = WordleSession::new(SessionId(1), UserId::new("alice"), answer);
    ///
    /// let turn = session.submit_guess(&dictionary, "solar").unwrap();
    /// assert_eq!(turn.state, GameState::InProgress);
    /// assert_eq!(session.round(), 1);
    ///
    /// let turn = session.submit_guess(&dictionary, "CRANE").unwrap();
    /// assert_eq!(turn.state, GameState::Won);
    /// assert_eq!(session.win_round(), Some(2));
    /// ```
    pub fn submit_guess(
        &mut self,
        dictionary: &Dictionary,
        raw_guess: &str,
    ) -> Result<Turn, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::SessionTerminal { state: self.state });
        }

        let guess = Word::new(raw_guess).map_err(|source| SessionError::InvalidGuessFormat {
            guess: raw_guess.to_string(),
            source,
        })?;

        if !dictionary.contains(&guess) {
            return Err(SessionError::UnknownWord(guess.to_string()));
        }

        self.round += 1;
        self.guesses.push(GuessRecord {
            round: self.round,
            word: guess,
        });
        self.updated_at = Utc::now();

        if guess == self.answer {
            self.state = GameState::Won;
            self.win_round = Some(self.round);
        } else if usize::from(self.round) == MAX_ROUNDS {
            self.state = GameState::Lost;
        }

        Ok(Turn {
            state: self.state,
            board: self.render_current(),
        })
    }

    /// Re-derive the board from the guesses made so far, without mutating anything
    #[must_use]
    pub fn render_current(&self) -> Board {
        Board::from_guesses(&self.answer, self.guesses.iter().map(|g| &g.word))
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Number of guesses evaluated so far (0-5)
    #[must_use]
    pub const fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Word> {
        self.guesses.last().map(|g| &g.word)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Round of the winning guess, `None` unless won
    #[must_use]
    pub const fn win_round(&self) -> Option<u8> {
        self.win_round
    }

    /// True when the answer was forced rather than drawn from the dictionary
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        self.practice
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
