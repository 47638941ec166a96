//! Puzzle generation
//!
//! Word selection, placement strategies and filler letters.

pub mod config;
pub mod placement;
mod puzzle;

pub use config::{DEFAULT_GRID_SIZE, DEFAULT_WORD_COUNT, PlacementMode, PuzzleConfig};
pub use placement::{PlacementStrategy, RetryPlacement, ScanPlacement};
pub use puzzle::{
    GenerateError, PlacedWord, Puzzle, generate, random_direction, random_letter, select_words,
};
