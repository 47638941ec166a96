//! Word Search
//!
//! Generates square letter grids with words hidden left to right or top to
//! bottom, and tracks a player's drag selections until every word is found.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordsearch::generator::{PuzzleConfig, generate};
//! use wordsearch::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let mut rng = StdRng::seed_from_u64(7);
//! let puzzle = generate(&words, &PuzzleConfig::default(), &mut rng).unwrap();
//! println!("{}", puzzle.grid());
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Drag selection state machine
pub mod selection;

// Game session and presentation interface
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod log;
