//! TUI application state and logic

use crate::core::{Board, WORD_LENGTH};
use crate::session::{GameState, PlayerStats, SessionEngine, UserId, WordleSession};
use crate::store::SessionStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S> {
    pub engine: &'a SessionEngine<S>,
    pub user: UserId,
    pub session: WordleSession,
    pub board: Board,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: PlayerStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: SessionStore> App<'a, S> {
    /// Load the user's game in progress, or start one
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn new(engine: &'a SessionEngine<S>, user: UserId) -> Result<Self> {
        let (session, board) = engine.resume(&user)?;
        let stats = engine.stats(&user)?;

        let mut app = Self {
            engine,
            user,
            session,
            board,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        if app.session.round() > 0 {
            app.add_message(
                &format!("Welcome back! Round {} of 5.", app.session.round()),
                MessageStyle::Info,
            );
        } else {
            app.add_message("Guess the 5-letter word in 5 tries.", MessageStyle::Info);
        }
        Ok(app)
    }

    /// Type a letter into the guess buffer
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the guess buffer
    ///
    /// # Errors
    ///
    /// Returns an error only if the session store fails; rejected guesses
    /// become messages.
    pub fn submit(&mut self) -> Result<()> {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return Ok(());
        }

        match self.engine.submit_guess(&self.user, &self.input_buffer) {
            Ok(turn) => {
                self.board = turn.board;
                self.input_buffer.clear();
                if let Some(latest) = self.engine.current(&self.user)? {
                    self.session = latest;
                }
                if turn.state.is_terminal() {
                    self.finish_game();
                }
            }
            Err(e) if e.is_rejected_input() => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        if let Ok(stats) = self.engine.stats(&self.user) {
            self.stats = stats;
        }

        match self.session.state() {
            GameState::Won => {
                let celebration = match self.session.win_round() {
                    Some(1) => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    Some(2) => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    Some(3) => "✨ SPLENDID! Three guesses! ✨",
                    Some(4) => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "😅 PHEW! Got it in five! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                let text = format!("Out of guesses! The word was {}.", self.session.answer());
                self.add_message(&text, MessageStyle::Error);
            }
            GameState::InProgress => {}
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the current game and start another
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = self.engine.start_new(&self.user)?;
        self.board = self.session.render_current();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }
}

impl<S> App<'_, S> {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Guesses left in the current game
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        crate::core::MAX_ROUNDS - usize::from(self.session.round())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game()?,
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit()?,
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::store::MemoryStore;
    use crate::wordlists::Dictionary;

    fn engine() -> SessionEngine<MemoryStore> {
        let dictionary = Dictionary::from_strs(&["crane", "solar", "tower"]).unwrap();
        SessionEngine::with_seed(EngineConfig::new(dictionary), MemoryStore::new(), 9)
    }

    fn type_word<S: SessionStore>(app: &mut App<'_, S>, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
    }

    #[test]
    fn push_letter_filters_and_caps() {
        let engine = engine();
        let mut app = App::new(&engine, UserId::new("alice")).unwrap();
        type_word(&mut app, "cr4nes!");
        assert_eq!(app.input_buffer, "CRNES");
    }

    #[test]
    fn short_guess_is_a_message() {
        let engine = engine();
        let mut app = App::new(&engine, UserId::new("alice")).unwrap();
        type_word(&mut app, "cra");
        app.submit().unwrap();
        assert_eq!(app.session.round(), 0);
        assert!(matches!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn winning_switches_to_game_over() {
        let engine = engine();
        let user = UserId::new("alice");
        engine.start_with_answer(&user, "crane").unwrap();
        engine.submit_guess(&user, "solar").unwrap();

        let mut app = App::new(&engine, user).unwrap();
        assert_eq!(app.session.round(), 1);
        assert_eq!(app.guesses_left(), 4);

        type_word(&mut app, "crane");
        app.submit().unwrap();
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.won, 1);

        app.new_game().unwrap();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.round(), 0);
        assert_eq!(app.board, Board::empty());
    }

    #[test]
    fn unknown_word_keeps_buffer() {
        let engine = engine();
        let mut app = App::new(&engine, UserId::new("alice")).unwrap();
        type_word(&mut app, "qwert");
        app.submit().unwrap();
        assert_eq!(app.input_buffer, "QWERT");
        assert_eq!(app.session.round(), 0);
    }

    #[test]
    fn messages_are_capped() {
        let engine = engine();
        let mut app = App::new(&engine, UserId::new("alice")).unwrap();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}
