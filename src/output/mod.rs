//! Terminal output formatting
//!
//! Display utilities for boards, game status and statistics.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_plain_board, print_stats, print_status};
