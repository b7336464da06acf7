//! Display functions for game results

use super::formatters::{colored_row, create_progress_bar, plain_row};
use crate::core::Board;
use crate::session::{GameState, PlayerStats, WordleSession};
use colored::Colorize;

/// Print the board, one row per line
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        println!("    {}", colored_row(row));
    }
    println!();
}

/// Print the board without ANSI colors
pub fn print_plain_board(board: &Board) {
    for row in board.rows() {
        println!("{}", plain_row(row));
    }
}

/// Print the game status line under a board
pub fn print_status(session: &WordleSession) {
    match session.state() {
        GameState::InProgress => {
            let left = crate::core::MAX_ROUNDS - usize::from(session.round());
            println!(
                "Round {} of {} - {} {} left",
                session.round(),
                crate::core::MAX_ROUNDS,
                left,
                if left == 1 { "guess" } else { "guesses" }
            );
            if let Some(last) = session.last_guess() {
                println!("Last guess: {}", last.text().bold());
            }
        }
        GameState::Won => {
            let round = session.win_round().unwrap_or(session.round());
            println!(
                "{}",
                format!(
                    "🎉 Solved in {round} {}!",
                    if round == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
            println!("\n{}", session.render_current().to_emoji());
        }
        GameState::Lost => {
            println!(
                "{} The word was {}",
                "❌ Out of guesses.".red().bold(),
                session.answer().text().bright_yellow().bold()
            );
        }
    }
}

/// Print win/loss statistics
pub fn print_stats(user: &str, stats: &PlayerStats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        user.bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:          {}", stats.played);
    println!("   Won:             {}", stats.won.to_string().green());
    println!("   Lost:            {}", stats.lost.to_string().red());
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    if let Some(avg) = stats.average_win_round() {
        println!("   Average guesses: {avg:.2}");
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
