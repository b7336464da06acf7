//! Wordle Session
//!
//! Per-user Wordle games: guess scoring, a five-round state machine and
//! persistent session storage behind a per-user lock.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_session::core::{Color, Word, score};
//!
//! let guess = Word::new("solar").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let row = score(&guess, &answer);
//! assert_eq!(row[3].color, Color::Present);
//! assert_eq!(row[0].color, Color::Absent);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Session state machine and orchestration
pub mod session;

// Session persistence
pub mod store;

// Error types
pub mod error;

// Engine configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
