//! Rendered game board
//!
//! A board is always 5 rows of 5 cells. Played rows hold scored letters,
//! unplayed rows hold placeholder cells.

use super::feedback::{Cell, Color, Row, score};
use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Number of guesses (and board rows) per game
pub const MAX_ROUNDS: usize = 5;

/// The 5×5 grid shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; MAX_ROUNDS],
}

impl Board {
    /// Board of a game with no guesses yet
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: [[Cell::EMPTY; WORD_LENGTH]; MAX_ROUNDS],
        }
    }

    /// Rebuild the board by scoring every guess against `answer`, in order
    ///
    /// Guesses beyond the fifth are ignored.
    pub fn from_guesses<'a, I>(answer: &Word, guesses: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        guesses
            .into_iter()
            .take(MAX_ROUNDS)
            .enumerate()
            .fold(Self::empty(), |mut board, (round, guess)| {
                board.rows[round] = score(guess, answer);
                board
            })
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROUNDS] {
        &self.rows
    }

    /// Get a row by index (0-4)
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Rows that hold a scored guess
    pub fn played_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .take_while(|row| row.iter().all(|cell| cell.color != Color::Empty))
    }

    /// Share string: one line of emoji squares per played row
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::{Board, Word};
    ///
    /// let answer = Word::new("crane").unwrap();
    /// let guesses = [Word::new("solar").unwrap(), Word::new("crane").unwrap()];
    /// let board = Board::from_guesses(&answer, &guesses);
    ///
    /// assert_eq!(board.to_emoji(), "⬜⬜⬜🟨🟨\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.played_rows()
            .map(|row| row.iter().map(|cell| cell.color.emoji()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_board_is_all_placeholders() {
        let board = Board::empty();
        for row in board.rows() {
            assert!(row.iter().all(|cell| *cell == Cell::EMPTY));
        }
        assert_eq!(board.played_rows().count(), 0);
        assert_eq!(board.to_emoji(), "");
    }

    #[test]
    fn from_guesses_fills_rows_in_order() {
        let answer = Word::new("crane").unwrap();
        let guesses = words(&["solar", "tower"]);
        let board = Board::from_guesses(&answer, &guesses);

        let first: String = board.row(0).unwrap().iter().map(|c| c.symbol).collect();
        let second: String = board.row(1).unwrap().iter().map(|c| c.symbol).collect();
        assert_eq!(first, "SOLAR");
        assert_eq!(second, "TOWER");
        assert_eq!(board.played_rows().count(), 2);

        for index in 2..MAX_ROUNDS {
            assert!(board.row(index).unwrap().iter().all(|c| *c == Cell::EMPTY));
        }
        assert!(board.row(MAX_ROUNDS).is_none());
    }

    #[test]
    fn from_guesses_ignores_extra_guesses() {
        let answer = Word::new("crane").unwrap();
        let guesses = words(&["solar", "tower", "slate", "brain", "plant", "crane"]);
        let board = Board::from_guesses(&answer, &guesses);

        assert_eq!(board.played_rows().count(), MAX_ROUNDS);
        let last: String = board.row(4).unwrap().iter().map(|c| c.symbol).collect();
        assert_eq!(last, "PLANT");
    }

    #[test]
    fn rebuilding_is_identical() {
        let answer = Word::new("crane").unwrap();
        let guesses = words(&["solar", "tower", "crane"]);
        assert_eq!(
            Board::from_guesses(&answer, &guesses),
            Board::from_guesses(&answer, &guesses)
        );
    }
}
