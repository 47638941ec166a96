//! Presentation interface
//!
//! Front ends implement [`PuzzleView`]; the session calls it whenever the
//! puzzle or a cell's style changes.

use crate::core::{Coord, Grid};
use crate::generator::PlacedWord;
use crate::selection::{CellState, Resolution};

/// Rendering callbacks driven by a [`super::PuzzleSession`]
pub trait PuzzleView {
    /// A new grid replaces the old one; every cell starts `Normal`
    fn render_grid(&mut self, grid: &Grid);

    /// The list of words to find
    fn render_word_list(&mut self, words: &[PlacedWord]);

    /// A single cell changed style
    fn set_cell_state(&mut self, coord: Coord, state: CellState);

    /// The last word was found. Called once per puzzle.
    fn notify_puzzle_complete(&mut self);

    /// A drag was released and resolved
    fn word_resolved(&mut self, _resolution: &Resolution) {}
}

/// Records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub grids: Vec<Grid>,
    pub word_lists: Vec<Vec<String>>,
    pub cell_changes: Vec<(Coord, CellState)>,
    pub completions: usize,
    pub resolutions: Vec<Resolution>,
}

#[cfg(test)]
impl PuzzleView for RecordingView {
    fn render_grid(&mut self, grid: &Grid) {
        self.grids.push(grid.clone());
    }

    fn render_word_list(&mut self, words: &[PlacedWord]) {
        self.word_lists
            .push(words.iter().map(|p| p.word.text().to_string()).collect());
    }

    fn set_cell_state(&mut self, coord: Coord, state: CellState) {
        self.cell_changes.push((coord, state));
    }

    fn notify_puzzle_complete(&mut self) {
        self.completions += 1;
    }

    fn word_resolved(&mut self, resolution: &Resolution) {
        self.resolutions.push(resolution.clone());
    }
}
