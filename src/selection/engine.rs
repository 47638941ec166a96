//! Drag selection state machine
//!
//! Tracks the path of the drag in progress, keeps it contiguous, and resolves
//! it against the word list on release. Every visible change is queued as a
//! [`SelectionEvent`] for the caller to drain.

use super::events::{CellState, Resolution, SelectionEvent, SelectionState};
use crate::core::{Coord, Grid, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use std::mem;

/// Selection engine for one puzzle instance
///
/// Built fresh for every puzzle; nothing carries over between puzzles.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    size: usize,
    state: SelectionState,
    path: Vec<Coord>,
    cells: Vec<CellState>,
    /// Letters (spaces removed) -> display text
    words: FxHashMap<String, String>,
    found: Vec<String>,
    found_keys: FxHashSet<String>,
    completed: bool,
    events: Vec<SelectionEvent>,
}

impl SelectionEngine {
    /// Create an engine for a `size`×`size` grid and the words to find
    ///
    /// Words with identical letters count once.
    pub fn new<'w>(size: usize, words: impl IntoIterator<Item = &'w Word>) -> Self {
        let mut lookup = FxHashMap::default();
        for word in words {
            lookup
                .entry(word.key())
                .or_insert_with(|| word.text().to_string());
        }

        Self {
            size,
            state: SelectionState::Idle,
            path: Vec::new(),
            cells: vec![CellState::Normal; size * size],
            words: lookup,
            found: Vec::new(),
            found_keys: FxHashSet::default(),
            completed: false,
            events: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    /// Cells of the drag in progress, in order
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Visual state of a cell; out-of-bounds cells read as `Normal`
    #[must_use]
    pub fn cell_state(&self, coord: Coord) -> CellState {
        self.index(coord)
            .map_or(CellState::Normal, |i| self.cells[i])
    }

    /// Found words (display text), in the order they were found
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Whether the word with this display text has been found
    #[must_use]
    pub fn is_found(&self, text: &str) -> bool {
        self.found.iter().any(|w| w == text)
    }

    /// Number of distinct words to find
    #[inline]
    #[must_use]
    pub fn target(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Start a drag at `cell`
    ///
    /// A drag already in progress is abandoned first. Returns false (and does
    /// nothing) if `cell` is outside the grid.
    pub fn begin_selection(&mut self, cell: Coord) -> bool {
        if self.index(cell).is_none() {
            return false;
        }

        if self.is_selecting() {
            log::debug!("New drag at {cell} abandons the previous one");
            self.clear_selected();
        }

        self.state = SelectionState::Selecting;
        self.path.clear();
        self.path.push(cell);
        self.mark_selected(cell);
        true
    }

    /// Extend the drag to `cell`
    ///
    /// Accepted only while selecting and only if `cell` shares an edge with
    /// the last cell of the path. Anything else is ignored. Returns whether
    /// the cell was appended.
    pub fn extend_selection(&mut self, cell: Coord) -> bool {
        if !self.is_selecting() || self.index(cell).is_none() {
            return false;
        }

        let adjacent = self.path.last().is_none_or(|last| last.is_adjacent(cell));
        if !adjacent {
            return false;
        }

        self.path.push(cell);
        self.mark_selected(cell);
        true
    }

    /// Release the drag and resolve it against the word list
    ///
    /// The path is read literally from `grid`. The path is always cleared
    /// afterwards, whatever the outcome.
    pub fn end_selection(&mut self, grid: &Grid) -> Resolution {
        if !self.is_selecting() {
            return Resolution::NoSelection;
        }
        self.state = SelectionState::Idle;

        let candidate = grid.read_path(&self.path);
        let resolution = match self.words.get(&candidate) {
            Some(text) if self.found_keys.contains(&candidate) => {
                let text = text.clone();
                log::debug!("\"{text}\" was already found");
                self.clear_selected();
                Resolution::AlreadyFound(text)
            }
            Some(text) => {
                let text = text.clone();
                self.found_keys.insert(candidate);
                self.found.push(text.clone());
                for cell in mem::take(&mut self.path) {
                    self.set_cell(cell, CellState::Found);
                }
                self.events.push(SelectionEvent::WordFound { word: text.clone() });
                self.check_completion();
                Resolution::Found(text)
            }
            None => {
                log::debug!("\"{candidate}\" is not on the word list");
                self.clear_selected();
                self.events.push(SelectionEvent::WordRejected {
                    candidate: candidate.clone(),
                });
                Resolution::NotFound(candidate)
            }
        };

        self.path.clear();
        resolution
    }

    /// Pointer left the puzzle surface
    ///
    /// Only acts while selecting: the drag is abandoned and its styling
    /// cleared. Returns whether a drag was abandoned.
    pub fn cancel_on_leave(&mut self) -> bool {
        if !self.is_selecting() {
            return false;
        }

        self.clear_selected();
        self.path.clear();
        self.state = SelectionState::Idle;
        true
    }

    /// Drain the queued events
    pub fn take_events(&mut self) -> Vec<SelectionEvent> {
        mem::take(&mut self.events)
    }

    fn check_completion(&mut self) {
        if !self.completed && self.found.len() == self.target() {
            self.completed = true;
            self.events.push(SelectionEvent::PuzzleComplete);
        }
    }

    fn mark_selected(&mut self, cell: Coord) {
        if self.cell_state(cell) == CellState::Normal {
            self.set_cell(cell, CellState::Selected);
        }
    }

    /// Return the path's Selected cells to Normal; Found cells stay Found
    fn clear_selected(&mut self) {
        for cell in mem::take(&mut self.path) {
            if self.cell_state(cell) == CellState::Selected {
                self.set_cell(cell, CellState::Normal);
            }
        }
    }

    fn set_cell(&mut self, coord: Coord, state: CellState) {
        let Some(index) = self.index(coord) else {
            return;
        };
        if self.cells[index] != state {
            self.cells[index] = state;
            self.events.push(SelectionEvent::CellChanged { coord, state });
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    /// Row 0 spells CAT, column 2 spells TOY
    fn grid() -> Grid {
        Grid::from_rows(&["CAT", "QRO", "ZXY"]).unwrap()
    }

    fn engine(list: &[&str]) -> SelectionEngine {
        SelectionEngine::new(3, &words(list))
    }

    fn drag(engine: &mut SelectionEngine, grid: &Grid, path: &[Coord]) -> Resolution {
        let (first, rest) = path.split_first().unwrap();
        engine.begin_selection(*first);
        for &cell in rest {
            engine.extend_selection(cell);
        }
        engine.end_selection(grid)
    }

    #[test]
    fn starts_idle_with_nothing_found() {
        let engine = engine(&["CAT", "TOY"]);
        assert_eq!(engine.state(), SelectionState::Idle);
        assert!(engine.path().is_empty());
        assert!(engine.found_words().is_empty());
        assert_eq!(engine.target(), 2);
        assert!(!engine.is_complete());
    }

    #[test]
    fn begin_marks_cell_selected() {
        let mut engine = engine(&["CAT"]);
        assert!(engine.begin_selection(c(1, 1)));

        assert_eq!(engine.state(), SelectionState::Selecting);
        assert_eq!(engine.path(), &[c(1, 1)]);
        assert_eq!(engine.cell_state(c(1, 1)), CellState::Selected);
        assert_eq!(
            engine.take_events(),
            vec![SelectionEvent::CellChanged {
                coord: c(1, 1),
                state: CellState::Selected
            }]
        );
    }

    #[test]
    fn begin_outside_grid_is_ignored() {
        let mut engine = engine(&["CAT"]);
        assert!(!engine.begin_selection(c(3, 0)));
        assert_eq!(engine.state(), SelectionState::Idle);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn extend_requires_active_drag() {
        let mut engine = engine(&["CAT"]);
        assert!(!engine.extend_selection(c(0, 1)));
        assert!(engine.path().is_empty());
    }

    #[test]
    fn non_adjacent_extension_is_ignored() {
        let mut engine = engine(&["CAT"]);
        engine.begin_selection(c(0, 0));

        assert!(!engine.extend_selection(c(0, 2))); // gap
        assert!(!engine.extend_selection(c(1, 1))); // diagonal
        assert!(engine.extend_selection(c(0, 1)));
        assert_eq!(engine.path(), &[c(0, 0), c(0, 1)]);
        assert_eq!(engine.cell_state(c(0, 2)), CellState::Normal);
    }

    #[test]
    fn adjacency_is_checked_against_last_cell() {
        let mut engine = engine(&["CAT"]);
        engine.begin_selection(c(0, 0));
        engine.extend_selection(c(0, 1));

        // (1, 0) touches the first cell but not the last
        assert!(!engine.extend_selection(c(1, 0)));
        assert!(engine.extend_selection(c(1, 1)));
    }

    #[test]
    fn straight_drag_finds_word() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);

        assert_eq!(resolution, Resolution::Found("CAT".to_string()));
        assert_eq!(engine.found_words(), &["CAT".to_string()]);
        assert!(engine.is_found("CAT"));
        assert!(!engine.is_found("TOY"));
        assert_eq!(engine.state(), SelectionState::Idle);
        assert!(engine.path().is_empty());
        for col in 0..3 {
            assert_eq!(engine.cell_state(c(0, col)), CellState::Found);
        }

        let events = engine.take_events();
        assert!(events.contains(&SelectionEvent::WordFound {
            word: "CAT".to_string()
        }));
        assert!(!events.contains(&SelectionEvent::PuzzleComplete));
    }

    #[test]
    fn l_shaped_drag_is_read_literally() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(1, 0), c(1, 1)]);

        assert_eq!(resolution, Resolution::NotFound("CQR".to_string()));
    }

    #[test]
    fn l_shaped_drag_can_match_coincidentally() {
        let grid = grid();
        let mut engine = engine(&["CQR"]);
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(1, 0), c(1, 1)]);

        assert_eq!(resolution, Resolution::Found("CQR".to_string()));
    }

    #[test]
    fn rejected_drag_restores_cells_and_keeps_found_words() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);

        for _ in 0..3 {
            let resolution = drag(&mut engine, &grid, &[c(2, 0), c(2, 1), c(1, 1)]);
            assert!(matches!(resolution, Resolution::NotFound(_)));
            assert!(engine.found_words().is_empty());
            assert!(grid.cells().all(|(coord, _)| engine.cell_state(coord) == CellState::Normal));
        }

        let events = engine.take_events();
        assert!(events.contains(&SelectionEvent::WordRejected {
            candidate: "ZXR".to_string()
        }));
    }

    #[test]
    fn single_cell_matches_single_letter_word() {
        let grid = grid();
        let mut engine = engine(&["X"]);
        let resolution = drag(&mut engine, &grid, &[c(2, 1)]);

        assert_eq!(resolution, Resolution::Found("X".to_string()));
        assert!(engine.is_complete());
    }

    #[test]
    fn revisited_cells_are_not_deduplicated() {
        let grid = Grid::from_rows(&["AN", "XY"]).unwrap();
        let mut engine = SelectionEngine::new(2, &words(&["ANA", "AN"]));
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 0)]);

        assert_eq!(resolution, Resolution::Found("ANA".to_string()));
    }

    #[test]
    fn match_is_exact_length() {
        let grid = grid();
        let mut engine = engine(&["CAT"]);
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(0, 1)]);
        assert_eq!(resolution, Resolution::NotFound("CA".to_string()));
    }

    #[test]
    fn duplicate_find_does_not_double_count() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);
        let path = [c(0, 0), c(0, 1), c(0, 2)];

        drag(&mut engine, &grid, &path);
        engine.take_events();
        let again = drag(&mut engine, &grid, &path);

        assert_eq!(again, Resolution::AlreadyFound("CAT".to_string()));
        assert_eq!(engine.found_words().len(), 1);
        assert!(!engine.is_complete());
        assert!(engine.take_events().is_empty());
        for col in 0..3 {
            assert_eq!(engine.cell_state(c(0, col)), CellState::Found);
        }
    }

    #[test]
    fn completion_fires_exactly_once() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);

        drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);
        assert!(!engine.is_complete());
        drag(&mut engine, &grid, &[c(0, 2), c(1, 2), c(2, 2)]);
        assert!(engine.is_complete());
        drag(&mut engine, &grid, &[c(0, 2), c(1, 2), c(2, 2)]);
        drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);

        let completions = engine
            .take_events()
            .into_iter()
            .filter(|e| *e == SelectionEvent::PuzzleComplete)
            .count();
        assert_eq!(completions, 1);
        assert_eq!(engine.found_words().len(), 2);
    }

    #[test]
    fn found_cells_survive_later_selections() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);
        drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);

        // A failed drag through the found T keeps it Found
        let resolution = drag(&mut engine, &grid, &[c(0, 2), c(1, 2), c(1, 1)]);
        assert!(matches!(resolution, Resolution::NotFound(_)));
        assert_eq!(engine.cell_state(c(0, 2)), CellState::Found);
        assert_eq!(engine.cell_state(c(1, 2)), CellState::Normal);

        // Crossing words share the found cell
        drag(&mut engine, &grid, &[c(0, 2), c(1, 2), c(2, 2)]);
        assert_eq!(engine.cell_state(c(0, 2)), CellState::Found);
        assert_eq!(engine.cell_state(c(2, 2)), CellState::Found);
    }

    #[test]
    fn end_without_drag_is_no_selection() {
        let grid = grid();
        let mut engine = engine(&["CAT"]);
        assert_eq!(engine.end_selection(&grid), Resolution::NoSelection);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn leave_abandons_drag_and_clears_styling() {
        let grid = grid();
        let mut engine = engine(&["CAT"]);
        engine.begin_selection(c(0, 0));
        engine.extend_selection(c(0, 1));

        assert!(engine.cancel_on_leave());
        assert_eq!(engine.state(), SelectionState::Idle);
        assert!(engine.path().is_empty());
        assert_eq!(engine.cell_state(c(0, 0)), CellState::Normal);
        assert_eq!(engine.cell_state(c(0, 1)), CellState::Normal);

        // Releasing afterwards resolves nothing
        assert_eq!(engine.end_selection(&grid), Resolution::NoSelection);
    }

    #[test]
    fn leave_while_idle_leaves_found_cells_alone() {
        let grid = grid();
        let mut engine = engine(&["CAT", "TOY"]);
        drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);
        engine.take_events();

        assert!(!engine.cancel_on_leave());
        assert!(engine.take_events().is_empty());
        assert_eq!(engine.cell_state(c(0, 0)), CellState::Found);
    }

    #[test]
    fn begin_during_drag_restarts() {
        let mut engine = engine(&["CAT"]);
        engine.begin_selection(c(0, 0));
        engine.extend_selection(c(0, 1));
        engine.begin_selection(c(2, 2));

        assert_eq!(engine.path(), &[c(2, 2)]);
        assert_eq!(engine.cell_state(c(0, 0)), CellState::Normal);
        assert_eq!(engine.cell_state(c(0, 1)), CellState::Normal);
        assert_eq!(engine.cell_state(c(2, 2)), CellState::Selected);
    }

    #[test]
    fn words_with_spaces_match_their_letters() {
        let grid = Grid::from_rows(&["ICE", "XXX", "XXX"]).unwrap();
        let mut engine = SelectionEngine::new(3, &words(&["I CE"]));
        let resolution = drag(&mut engine, &grid, &[c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(resolution, Resolution::Found("I CE".to_string()));
    }
}
