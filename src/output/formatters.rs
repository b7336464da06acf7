//! Formatting utilities for terminal output

use crate::core::{Cell, Color, Row};
use colored::{ColoredString, Colorize};

/// Render one cell as a padded letter on its feedback color
#[must_use]
pub fn colored_cell(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.symbol);
    match cell.color {
        Color::Exact => text.black().on_green().bold(),
        Color::Present => text.black().on_yellow().bold(),
        Color::Absent => text.white().on_bright_black().bold(),
        Color::Empty => text.bright_black(),
    }
}

/// Render a board row as colored cells separated by a space
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.iter()
        .map(|&cell| colored_cell(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text row for terminals without color: letters with a color marker
///
/// Exact letters are wrapped in `[ ]`, present letters in `( )`, absent and
/// empty cells are padded with spaces.
#[must_use]
pub fn plain_row(row: &Row) -> String {
    row.iter()
        .map(|cell| match cell.color {
            Color::Exact => format!("[{}]", cell.symbol),
            Color::Present => format!("({})", cell.symbol),
            Color::Absent | Color::Empty => format!(" {} ", cell.symbol),
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    #[test]
    fn plain_row_marks_colors() {
        let row = score(&Word::new("solar").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(plain_row(&row), " S  O  L (A)(R)");

        let row = score(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(plain_row(&row), "[C][R][A][N][E]");
    }

    #[test]
    fn plain_row_empty() {
        assert_eq!(plain_row(&[Cell::EMPTY; 5]), " .  .  .  .  . ");
    }

    #[test]
    fn colored_cell_keeps_symbol() {
        colored::control::set_override(false);
        assert_eq!(colored_cell(Cell::new('A', Color::Exact)).to_string(), " A ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
