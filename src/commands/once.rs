//! One-shot commands
//!
//! Each command performs a single engine operation, the way one page load or
//! one form submission would.

use crate::core::Board;
use crate::output::{print_board, print_plain_board, print_stats, print_status};
use crate::session::{GameState, PlayOutcome, SessionEngine, SessionId, UserId, WordleSession};
use crate::store::SessionStore;
use anyhow::{Context, Result};
use serde::Serialize;

/// JSON view of the current game
#[derive(Debug, Serialize)]
pub struct GameView {
    pub session: SessionId,
    pub state: GameState,
    pub round: u8,
    pub board: Board,
    /// Revealed only once the game is lost
    pub answer: Option<String>,
}

impl GameView {
    #[must_use]
    pub fn new(session: &WordleSession, board: Board) -> Self {
        Self {
            session: session.id(),
            state: session.state(),
            round: session.round(),
            board,
            answer: (session.state() == GameState::Lost).then(|| session.answer().to_string()),
        }
    }
}

/// The game `show` displays
///
/// A finished latest game is shown as it ended; the next `guess` or `play`
/// moves on to a new one. Otherwise this is the page-load flow.
fn displayed_game<S: SessionStore>(
    engine: &SessionEngine<S>,
    user: &UserId,
) -> Result<(WordleSession, Board)> {
    match engine.current(user)? {
        Some(session) if session.is_terminal() => {
            let board = session.render_current();
            Ok((session, board))
        }
        _ => Ok(engine.resume(user)?),
    }
}

/// How `show` prints the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Colored,
    /// No ANSI colors: `[X]` green, `(X)` yellow
    Plain,
    Json,
}

/// Submit one guess, starting a game first if needed
///
/// # Errors
///
/// Returns an error if the guess is rejected or the session store fails.
pub fn guess<S: SessionStore>(engine: &SessionEngine<S>, user: &UserId, word: &str) -> Result<()> {
    match engine.play(user, word.trim())? {
        PlayOutcome::Accepted(turn) => {
            print_board(&turn.board);
            let session = engine
                .current(user)?
                .context("session vanished after guess")?;
            print_status(&session);
        }
        PlayOutcome::NewGame(board) => {
            println!("Your last game is over, so a new one was started. Guess again!");
            print_board(&board);
        }
    }
    Ok(())
}

/// Show the latest game, or a fresh board
///
/// # Errors
///
/// Returns an error if the session store fails.
pub fn show<S: SessionStore>(
    engine: &SessionEngine<S>,
    user: &UserId,
    format: ShowFormat,
) -> Result<()> {
    let (session, board) = displayed_game(engine, user)?;

    match format {
        ShowFormat::Json => {
            let view = GameView::new(&session, board);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        ShowFormat::Plain => {
            print_plain_board(&board);
            print_status(&session);
        }
        ShowFormat::Colored => {
            print_board(&board);
            print_status(&session);
        }
    }
    Ok(())
}

/// Abandon the current game and start another
///
/// # Errors
///
/// Returns an error if `answer` is not a dictionary word or the session store fails.
pub fn new_game<S: SessionStore>(
    engine: &SessionEngine<S>,
    user: &UserId,
    answer: Option<&str>,
) -> Result<()> {
    let session = match answer {
        Some(answer) => engine.start_with_answer(user, answer)?,
        None => engine.start_new(user)?,
    };
    println!("🔄 New game started ({}).", session.id());
    print_board(&session.render_current());
    Ok(())
}

/// Print win/loss statistics for the user
///
/// # Errors
///
/// Returns an error if the session store fails.
pub fn stats<S: SessionStore>(engine: &SessionEngine<S>, user: &UserId) -> Result<()> {
    let stats = engine.stats(user)?;
    print_stats(user.as_str(), &stats);
    Ok(())
}
