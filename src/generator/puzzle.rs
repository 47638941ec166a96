//! Puzzle generation
//!
//! Draws words from the master list, places each one along a straight line,
//! and fills the rest of the grid with random letters.

use super::config::PuzzleConfig;
use super::placement::PlacementStrategy;
use crate::core::{Coord, Direction, DraftGrid, Grid, Placement, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// A word together with where it was placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: Word,
    pub placement: Placement,
}

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Grid size or word count of zero
    InvalidConfig { grid_size: usize, word_count: usize },
    /// The master list has fewer distinct words than requested
    NotEnoughWords { available: usize, requested: usize },
    /// Every selected word was skipped; the puzzle would have nothing to find
    NoWordsPlaced { skipped: Vec<Word> },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                grid_size,
                word_count,
            } => write!(
                f,
                "Grid size and word count must be positive, got size {grid_size} and count {word_count}"
            ),
            Self::NotEnoughWords {
                available,
                requested,
            } => write!(
                f,
                "Word list has {available} distinct words but {requested} were requested"
            ),
            Self::NoWordsPlaced { skipped } => write!(
                f,
                "None of the {} selected words fit in the grid",
                skipped.len()
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// A generated puzzle instance
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    placed: Vec<PlacedWord>,
    skipped: Vec<Word>,
}

impl Puzzle {
    #[must_use]
    pub const fn new(grid: Grid, placed: Vec<PlacedWord>, skipped: Vec<Word>) -> Self {
        Self {
            grid,
            placed,
            skipped,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words the player is asked to find, in selection order
    #[inline]
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words that were selected but did not fit
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> &[Word] {
        &self.skipped
    }

    /// Iterate over the playable words
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.placed.iter().map(|p| &p.word)
    }

    /// Look up the placed word covering `coord`, if any
    #[must_use]
    pub fn word_at(&self, coord: Coord) -> Option<&PlacedWord> {
        self.placed.iter().find(|p| p.placement.contains(coord))
    }
}

/// Choose `count` distinct words at random
///
/// Duplicates (by letters) in `master` are collapsed first, then the list is
/// Fisher–Yates shuffled and the first `count` words are taken.
///
/// # Errors
///
/// Returns `GenerateError::NotEnoughWords` if `master` has fewer than `count`
/// distinct words.
pub fn select_words<R: Rng + ?Sized>(
    master: &[Word],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Word>, GenerateError> {
    let mut seen = FxHashSet::default();
    let mut pool: Vec<Word> = master
        .iter()
        .filter(|w| seen.insert(w.letters()))
        .cloned()
        .collect();

    if pool.len() < count {
        return Err(GenerateError::NotEnoughWords {
            available: pool.len(),
            requested: count,
        });
    }

    pool.shuffle(rng);
    pool.truncate(count);
    Ok(pool)
}

/// Pick Horizontal or Vertical with equal probability
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    if rng.random_bool(0.5) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

/// Uniformly random filler letter A-Z
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(b'A'..=b'Z')
}

/// Generate a complete puzzle
///
/// Words that cannot be placed are left out of [`Puzzle::placed`] and
/// reported in [`Puzzle::skipped`], so every listed word is findable.
///
/// # Errors
///
/// Returns `GenerateError` if the configuration is degenerate, the master
/// list is too short, or no selected word fits at all.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordsearch::core::Word;
/// use wordsearch::generator::{PuzzleConfig, generate};
///
/// let master: Vec<Word> = ["kiwi", "fig", "jam"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let mut config = PuzzleConfig::default();
/// config.word_count = 3;
///
/// let puzzle = generate(&master, &config, &mut StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(puzzle.grid().size(), 10);
/// assert_eq!(puzzle.placed().len(), 3);
/// ```
pub fn generate<R: Rng + ?Sized>(
    master: &[Word],
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    if config.grid_size == 0 || config.word_count == 0 {
        return Err(GenerateError::InvalidConfig {
            grid_size: config.grid_size,
            word_count: config.word_count,
        });
    }

    let selected = select_words(master, config.word_count, rng)?;
    log::debug!(
        "Selected words: {}",
        selected
            .iter()
            .map(Word::text)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut draft = DraftGrid::new(config.grid_size);
    let mut placed = Vec::with_capacity(selected.len());
    let mut skipped = Vec::new();

    for word in selected {
        let direction = random_direction(rng);
        let placement = config
            .placement
            .find_origin(&draft, &word, direction, rng)
            .and_then(|origin| draft.place(&word, origin, direction));

        if let Some(placement) = placement {
            log::debug!("Placed \"{word}\" at {} {direction}", placement.origin);
            placed.push(PlacedWord { word, placement });
        } else {
            log::info!("Skipped \"{word}\": no {direction} spot in the grid");
            skipped.push(word);
        }
    }

    if placed.is_empty() {
        return Err(GenerateError::NoWordsPlaced { skipped });
    }

    let grid = draft.fill(|| random_letter(rng));
    Ok(Puzzle::new(grid, placed, skipped))
}
