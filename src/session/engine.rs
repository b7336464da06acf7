//! Session orchestration
//!
//! The engine owns the read-modify-write cycle around a user's latest session:
//! take the user's lock, read the latest row, apply one operation, persist.
//! Holding the per-user lock across that cycle means two concurrent guesses
//! from the same user can never both be evaluated against the same round.

use super::state::{GameState, Turn, UserId, WordleSession};
use super::stats::PlayerStats;
use crate::config::EngineConfig;
use crate::core::{Board, Word};
use crate::error::SessionError;
use crate::store::SessionStore;
use crate::wordlists::Dictionary;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

type UserLocks = DashMap<UserId, Arc<Mutex<()>>>;

/// Outcome of a form-style submission through [`SessionEngine::play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The guess was evaluated against the active session
    Accepted(Turn),
    /// The latest session was already over; a new game was started and the
    /// guess was discarded
    NewGame(Board),
}

/// Wordle session engine
pub struct SessionEngine<S> {
    config: EngineConfig,
    store: S,
    rng: Mutex<StdRng>,
    user_locks: UserLocks,
}

impl<S: SessionStore> SessionEngine<S> {
    /// Create an engine that draws answers from OS entropy
    pub fn new(config: EngineConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_os_rng())
    }

    /// Create an engine with reproducible answer selection
    pub fn with_seed(config: EngineConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, store: S, rng: StdRng) -> Self {
        Self {
            config,
            store,
            rng: Mutex::new(rng),
            user_locks: DashMap::new(),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        self.config.dictionary()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run `f` while holding `user`'s lock
    ///
    /// The lock entry is dropped again once no other caller holds it, so the
    /// map only ever contains users with an operation in flight.
    fn with_user_lock<T>(&self, user: &UserId, f: impl FnOnce() -> T) -> T {
        let lock = Arc::clone(&self.user_locks.entry(user.clone()).or_default());
        let result = {
            let _guard = lock.lock();
            f()
        };
        drop(lock);
        self.user_locks
            .remove_if(user, |_, held| Arc::strong_count(held) == 1);
        result
    }

    /// Start a new session with a random answer
    ///
    /// Any earlier session of the user stays stored but is no longer playable.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the session cannot be persisted.
    pub fn start_new(&self, user: &UserId) -> Result<WordleSession, SessionError> {
        self.with_user_lock(user, || self.start_locked(user, None))
    }

    /// Start a new session with a chosen answer
    ///
    /// # Errors
    ///
    /// - `InvalidGuessFormat` / `AnswerNotInDictionary` if `answer` is not a dictionary word
    /// - `Storage` if the session cannot be persisted
    pub fn start_with_answer(
        &self,
        user: &UserId,
        answer: &str,
    ) -> Result<WordleSession, SessionError> {
        let word = Word::new(answer).map_err(|source| SessionError::InvalidGuessFormat {
            guess: answer.to_string(),
            source,
        })?;
        if !self.dictionary().contains(&word) {
            return Err(SessionError::AnswerNotInDictionary(word.to_string()));
        }

        self.with_user_lock(user, || self.start_locked(user, Some(word)))
    }

    /// Evaluate one guess against the user's latest session and persist it
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if the user has never started a game
    /// - `SessionTerminal` if the latest session is won or lost
    /// - `InvalidGuessFormat` / `UnknownWord` for rejected guesses
    /// - `Storage` if reading or writing the session fails
    pub fn submit_guess(&self, user: &UserId, raw_guess: &str) -> Result<Turn, SessionError> {
        self.with_user_lock(user, || {
            let mut session = self
                .store
                .latest_for_user(user)?
                .ok_or_else(|| SessionError::NoActiveSession(user.clone()))?;

            self.advance_locked(&mut session, raw_guess)
        })
    }

    /// Board of the user's latest session, without consuming a guess
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if the user has never started a game
    /// - `Storage` if reading the session fails
    pub fn render_current(&self, user: &UserId) -> Result<Board, SessionError> {
        self.store
            .latest_for_user(user)?
            .map(|session| session.render_current())
            .ok_or_else(|| SessionError::NoActiveSession(user.clone()))
    }

    /// Latest session of the user, playable or not
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if reading the session fails.
    pub fn current(&self, user: &UserId) -> Result<Option<WordleSession>, SessionError> {
        Ok(self.store.latest_for_user(user)?)
    }

    /// Page-load flow: show the game in progress, or start a fresh one
    ///
    /// A new session is started when the user has none, when the latest one is
    /// won or lost, or when it is a random game with no guesses yet. Otherwise
    /// the latest session is rendered unchanged; a practice game keeps its
    /// forced answer even before the first guess.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if reading or writing the session fails.
    pub fn resume(&self, user: &UserId) -> Result<(WordleSession, Board), SessionError> {
        self.with_user_lock(user, || {
            let session = match self.store.latest_for_user(user)? {
                Some(session)
                    if !session.is_terminal()
                        && (session.is_practice() || !session.guesses().is_empty()) =>
                {
                    debug!(user = %user, session = %session.id(), round = session.round(), "resuming session");
                    session
                }
                _ => self.start_locked(user, None)?,
            };

            let board = session.render_current();
            Ok((session, board))
        })
    }

    /// Form-submit flow: play a guess, starting a game first when needed
    ///
    /// With no session at all, a new game is started and the guess is played
    /// in it. When the latest session is already over, the submission is a
    /// stale resend: a new game is started and the guess is discarded.
    ///
    /// # Errors
    ///
    /// - `InvalidGuessFormat` / `UnknownWord` for rejected guesses
    /// - `Storage` if reading or writing the session fails
    pub fn play(&self, user: &UserId, raw_guess: &str) -> Result<PlayOutcome, SessionError> {
        self.with_user_lock(user, || {
            let mut session = match self.store.latest_for_user(user)? {
                Some(session) if session.is_terminal() => {
                    debug!(user = %user, session = %session.id(), "guess after game over, restarting");
                    let fresh = self.start_locked(user, None)?;
                    return Ok(PlayOutcome::NewGame(fresh.render_current()));
                }
                Some(session) => session,
                None => self.start_locked(user, None)?,
            };

            self.advance_locked(&mut session, raw_guess)
                .map(PlayOutcome::Accepted)
        })
    }

    /// Win/loss statistics over the user's finished sessions
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if reading the sessions fails.
    pub fn stats(&self, user: &UserId) -> Result<PlayerStats, SessionError> {
        let sessions = self.store.sessions_for_user(user)?;
        Ok(PlayerStats::from_sessions(&sessions))
    }

    fn start_locked(
        &self,
        user: &UserId,
        answer: Option<Word>,
    ) -> Result<WordleSession, SessionError> {
        let id = self.store.next_id()?;
        let session = match answer {
            Some(answer) => WordleSession::practice(id, user.clone(), answer),
            None => {
                let answer = *self.dictionary().choose(&mut *self.rng.lock());
                WordleSession::new(id, user.clone(), answer)
            }
        };
        self.store.upsert(&session)?;

        info!(user = %user, session = %session.id(), "started new game");
        Ok(session)
    }

    fn advance_locked(
        &self,
        session: &mut WordleSession,
        raw_guess: &str,
    ) -> Result<Turn, SessionError> {
        let turn = session
            .submit_guess(self.dictionary(), raw_guess)
            .inspect_err(|e| {
                debug!(user = %session.user_id(), session = %session.id(), error = %e, "guess rejected");
            })?;

        self.store.upsert(session)?;

        match turn.state {
            GameState::Won => info!(
                user = %session.user_id(),
                session = %session.id(),
                round = session.round(),
                "game won"
            ),
            GameState::Lost => info!(
                user = %session.user_id(),
                session = %session.id(),
                answer = %session.answer(),
                "game lost"
            ),
            GameState::InProgress => debug!(
                user = %session.user_id(),
                session = %session.id(),
                round = session.round(),
                "guess accepted"
            ),
        }

        Ok(turn)
    }
}
