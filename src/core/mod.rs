//! Core domain types for word search puzzles
//!
//! Words, coordinates, placements and the letter grid. Everything here is
//! deterministic; randomness lives in the generator.

mod grid;
mod word;

pub use grid::{Coord, Direction, DraftGrid, Grid, GridError, Placement};
pub use word::{Word, WordError};
