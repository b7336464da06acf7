//! Guess scoring
//!
//! Each position of a guess is colored independently:
//! - Exact (green): the letter matches the answer at that position
//! - Present (yellow): the letter occurs somewhere else in the answer
//! - Absent (grey): the letter does not occur in the answer
//!
//! Duplicate letters are not consumed: every copy of a letter that occurs in
//! the answer is marked Present, however many copies the answer holds.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback color of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Letter not in the answer
    #[serde(rename = "grey")]
    Absent,
    /// Letter in the answer at another position
    #[serde(rename = "yellow")]
    Present,
    /// Letter at the right position
    #[serde(rename = "green")]
    Exact,
    /// Placeholder for an unplayed cell
    Empty,
}

impl Color {
    /// Palette name as shown to players
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "grey",
            Self::Present => "yellow",
            Self::Exact => "green",
            Self::Empty => "empty",
        }
    }

    /// Emoji square for share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One letter/color cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: char,
    pub color: Color,
}

impl Cell {
    /// Placeholder cell for rows that have not been played yet
    pub const EMPTY: Self = Self {
        symbol: '.',
        color: Color::Empty,
    };

    #[must_use]
    pub const fn new(symbol: char, color: Color) -> Self {
        Self { symbol, color }
    }
}

/// Scored row: one cell per letter of the guess
pub type Row = [Cell; WORD_LENGTH];

/// Score `guess` against `answer`
///
/// # Examples
/// ```
/// use wordle_session::core::{Color, Word, score};
///
/// let guess = Word::new("solar").unwrap();
/// let answer = Word::new("crane").unwrap();
/// let row = score(&guess, &answer);
///
/// let colors: Vec<Color> = row.iter().map(|cell| cell.color).collect();
/// assert_eq!(
///     colors,
///     [Color::Absent, Color::Absent, Color::Absent, Color::Present, Color::Present]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Row {
    let mut row = [Cell::EMPTY; WORD_LENGTH];

    for (i, (cell, &letter)) in row.iter_mut().zip(guess.chars()).enumerate() {
        let color = if letter == answer.char_at(i) {
            Color::Exact
        } else if answer.has_letter(letter) {
            Color::Present
        } else {
            Color::Absent
        };
        *cell = Cell::new(char::from(letter), color);
    }

    row
}

/// Check whether every cell of a scored row is Exact
#[must_use]
pub fn is_solved(row: &Row) -> bool {
    row.iter().all(|cell| cell.color == Color::Exact)
}
