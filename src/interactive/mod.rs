//! Interactive TUI for playing against the session engine

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
