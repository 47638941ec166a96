//! Placement strategies
//!
//! Defines the `PlacementStrategy` trait and the two ways of finding a free
//! origin for a word.

use crate::core::{Coord, Direction, DraftGrid, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// Attempts made by [`RetryPlacement::default`]
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// A strategy for finding where a word can go
pub trait PlacementStrategy {
    /// Find an origin from which `word` fits along `direction`
    ///
    /// Returns `None` if the strategy gives up; the caller skips the word.
    fn find_origin<R: Rng + ?Sized>(
        &self,
        draft: &DraftGrid,
        word: &Word,
        direction: Direction,
        rng: &mut R,
    ) -> Option<Coord>;
}

/// Shuffled scan strategy
///
/// Shuffles row and column indices independently, then walks the cross
/// product rows × columns and takes the first origin that fits. Returns
/// `None` only when no origin in the grid fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanPlacement;

impl PlacementStrategy for ScanPlacement {
    fn find_origin<R: Rng + ?Sized>(
        &self,
        draft: &DraftGrid,
        word: &Word,
        direction: Direction,
        rng: &mut R,
    ) -> Option<Coord> {
        let rows = shuffled_indices(draft.size(), rng);
        let cols = shuffled_indices(draft.size(), rng);

        rows.iter()
            .flat_map(|&row| cols.iter().map(move |&col| Coord::new(row, col)))
            .find(|&origin| draft.can_place(word, origin, direction))
    }
}

/// Bounded random-sampling strategy
///
/// Samples a uniformly random origin up to `max_attempts` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPlacement {
    pub max_attempts: usize,
}

impl RetryPlacement {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

impl Default for RetryPlacement {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl PlacementStrategy for RetryPlacement {
    fn find_origin<R: Rng + ?Sized>(
        &self,
        draft: &DraftGrid,
        word: &Word,
        direction: Direction,
        rng: &mut R,
    ) -> Option<Coord> {
        let size = draft.size();
        if size == 0 {
            return None;
        }

        (0..self.max_attempts)
            .map(|_| Coord::new(rng.random_range(0..size), rng.random_range(0..size)))
            .find(|&origin| draft.can_place(word, origin, direction))
    }
}

/// Indices `0..n` in Fisher–Yates shuffled order
fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}
