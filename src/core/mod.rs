//! Core domain types for Wordle
//!
//! Words, per-position guess scoring and the rendered board. Everything here is
//! pure: no I/O, no randomness, no shared state.

mod board;
mod feedback;
mod word;

pub use board::{Board, MAX_ROUNDS};
pub use feedback::{Cell, Color, Row, is_solved, score};
pub use word::{WORD_LENGTH, Word, WordError};
