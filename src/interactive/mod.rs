//! Interactive TUI interface
//!
//! Mouse-driven play with ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
