//! Command implementations

pub mod once;
pub mod simple;

pub use once::{GameView, ShowFormat, guess, new_game, show, stats};
pub use simple::{run_simple, run_simple_with};
