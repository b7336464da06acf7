//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::output::{print_board, print_status};
use crate::session::{SessionEngine, UserId};
use crate::store::SessionStore;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        _ => Input::Guess(trimmed.to_string()),
    }
}

/// Run the simple interactive CLI mode, reading guesses from stdin
///
/// # Errors
///
/// Returns an error if reading input fails or the session store fails.
pub fn run_simple<S: SessionStore>(engine: &SessionEngine<S>, user: &UserId) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(engine, user, stdin.lock())
}

/// Game loop over any line source
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input fails or the session store fails.
pub fn run_simple_with<S: SessionStore, R: BufRead>(
    engine: &SessionEngine<S>,
    user: &UserId,
    mut reader: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 5 tries.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    let (mut session, board) = engine.resume(user)?;
    print_board(&board);
    print_status(&session);

    loop {
        if session.is_terminal() {
            print!("Play again? (yes/no): ");
            io::stdout().flush()?;
            let Some(line) = read_line(&mut reader)? else {
                break;
            };
            if !matches!(line.trim().to_ascii_lowercase().as_str(), "yes" | "y") {
                break;
            }
            session = engine.start_new(user)?;
            println!("\n🔄 New game started!");
            print_board(&session.render_current());
            continue;
        }

        print!("Guess: ");
        io::stdout().flush()?;
        let Some(line) = read_line(&mut reader)? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::NewGame => {
                session = engine.start_new(user)?;
                println!("\n🔄 New game started!");
                print_board(&session.render_current());
            }
            Input::Guess(guess) if guess.is_empty() => {}
            Input::Guess(guess) => match engine.submit_guess(user, &guess) {
                Ok(turn) => {
                    print_board(&turn.board);
                    if let Some(latest) = engine.current(user)? {
                        session = latest;
                    }
                    print_status(&session);
                }
                Err(e) if e.is_rejected_input() => println!("❌ {e}"),
                Err(e) => return Err(e.into()),
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
