//! Terminal output formatting
//!
//! Display utilities for puzzles, boards and benchmark results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_board, print_puzzle};
