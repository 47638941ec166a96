//! Screen-side mirror of a puzzle
//!
//! [`Board`] is the `PuzzleView` both front ends render from: it keeps a copy
//! of the grid, the style of every cell and the word list with found marks.

use super::view::PuzzleView;
use crate::core::{Coord, Grid};
use crate::generator::PlacedWord;
use crate::selection::{CellState, Resolution};

/// One row of the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub found: bool,
}

/// What the player currently sees
#[derive(Debug, Clone, Default)]
pub struct Board {
    grid: Option<Grid>,
    cells: Vec<CellState>,
    words: Vec<WordEntry>,
    complete: bool,
    last_resolution: Option<Resolution>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid being shown, if one has been rendered
    #[must_use]
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub fn cell_state(&self, coord: Coord) -> CellState {
        self.grid
            .as_ref()
            .filter(|g| g.contains(coord))
            .map_or(CellState::Normal, |g| {
                self.cells[coord.row * g.size() + coord.col]
            })
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub const fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }
}

impl PuzzleView for Board {
    fn render_grid(&mut self, grid: &Grid) {
        self.cells = vec![CellState::Normal; grid.size() * grid.size()];
        self.grid = Some(grid.clone());
        self.complete = false;
        self.last_resolution = None;
    }

    fn render_word_list(&mut self, words: &[PlacedWord]) {
        self.words = words
            .iter()
            .map(|p| WordEntry {
                text: p.word.text().to_string(),
                found: false,
            })
            .collect();
    }

    fn set_cell_state(&mut self, coord: Coord, state: CellState) {
        let Some(size) = self.grid.as_ref().map(Grid::size) else {
            return;
        };
        if coord.row < size && coord.col < size {
            self.cells[coord.row * size + coord.col] = state;
        }
    }

    fn notify_puzzle_complete(&mut self) {
        self.complete = true;
    }

    fn word_resolved(&mut self, resolution: &Resolution) {
        if let Resolution::Found(text) = resolution {
            for entry in self.words.iter_mut().filter(|w| &w.text == text) {
                entry.found = true;
            }
        }
        self.last_resolution = Some(resolution.clone());
    }
}
