//! Word lists for puzzle generation
//!
//! Provides the default vocabulary compiled into the binary, plus loading of
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
