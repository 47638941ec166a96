//! Puzzle generation settings

use super::placement::{PlacementStrategy, RetryPlacement, ScanPlacement};
use crate::core::{Coord, Direction, DraftGrid, Word};
use rand::Rng;

/// Default grid dimension (10×10)
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Default number of words hidden per puzzle
pub const DEFAULT_WORD_COUNT: usize = 10;

/// Settings for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Grid dimension N for an N×N grid
    pub grid_size: usize,
    /// Number of words drawn from the master list
    pub word_count: usize,
    /// How a free spot is searched for each word
    pub placement: PlacementMode,
}

impl PuzzleConfig {
    #[must_use]
    pub const fn new(grid_size: usize, word_count: usize, placement: PlacementMode) -> Self {
        Self {
            grid_size,
            word_count,
            placement,
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRID_SIZE,
            DEFAULT_WORD_COUNT,
            PlacementMode::Scan(ScanPlacement),
        )
    }
}

/// Enum wrapper for all placement strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementMode {
    /// Shuffled row × column scan (default, always finds a spot if one exists)
    Scan(ScanPlacement),
    /// Bounded random sampling
    Retry(RetryPlacement),
}

impl PlacementMode {
    /// Create a placement mode from its name
    ///
    /// Supported names: "scan", "retry". Defaults to scan if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "retry" | "random" => Self::Retry(RetryPlacement::default()),
            _ => Self::Scan(ScanPlacement),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scan(_) => "scan",
            Self::Retry(_) => "retry",
        }
    }
}

impl PlacementStrategy for PlacementMode {
    fn find_origin<R: Rng + ?Sized>(
        &self,
        draft: &DraftGrid,
        word: &Word,
        direction: Direction,
        rng: &mut R,
    ) -> Option<Coord> {
        match self {
            Self::Scan(s) => s.find_origin(draft, word, direction, rng),
            Self::Retry(s) => s.find_origin(draft, word, direction, rng),
        }
    }
}
