//! Puzzle session
//!
//! Owns one puzzle instance and its selection engine, routes pointer
//! gestures, and forwards every resulting change to a [`PuzzleView`].
//! Regeneration replaces the puzzle and the engine wholesale.

mod board;
mod view;

pub use board::{Board, WordEntry};
pub use view::PuzzleView;

#[cfg(test)]
pub(crate) use view::RecordingView;

use crate::core::{Coord, Grid, Word};
use crate::generator::{GenerateError, Puzzle, PuzzleConfig, generate};
use crate::selection::{CellState, Resolution, SelectionEngine, SelectionEvent};
use rand::Rng;

/// A running word search game
pub struct PuzzleSession<R: Rng> {
    master: Vec<Word>,
    config: PuzzleConfig,
    rng: R,
    puzzle: Puzzle,
    selection: SelectionEngine,
}

impl<R: Rng> PuzzleSession<R> {
    /// Create a session and generate its first puzzle
    ///
    /// Nothing is rendered yet; call [`PuzzleSession::present`] once a view
    /// is ready.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` if the first puzzle cannot be generated.
    pub fn new(master: Vec<Word>, config: PuzzleConfig, mut rng: R) -> Result<Self, GenerateError> {
        let puzzle = generate(&master, &config, &mut rng)?;
        let selection = engine_for(&puzzle);
        log::info!(
            "New puzzle: {} words placed, {} skipped",
            puzzle.placed().len(),
            puzzle.skipped().len()
        );

        Ok(Self {
            master,
            config,
            rng,
            puzzle,
            selection,
        })
    }

    /// Generate a fresh puzzle, reset the selection state and re-render
    ///
    /// On error the current puzzle stays in place.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` if generation fails.
    pub fn new_puzzle<V: PuzzleView + ?Sized>(&mut self, view: &mut V) -> Result<(), GenerateError> {
        let puzzle = generate(&self.master, &self.config, &mut self.rng)?;
        log::info!(
            "New puzzle: {} words placed, {} skipped",
            puzzle.placed().len(),
            puzzle.skipped().len()
        );

        self.selection = engine_for(&puzzle);
        self.puzzle = puzzle;
        self.present(view);
        Ok(())
    }

    /// Render the grid, the word list and any non-normal cells
    pub fn present<V: PuzzleView + ?Sized>(&self, view: &mut V) {
        view.render_grid(self.puzzle.grid());
        view.render_word_list(self.puzzle.placed());
        for (coord, _) in self.puzzle.grid().cells() {
            let state = self.selection.cell_state(coord);
            if state != CellState::Normal {
                view.set_cell_state(coord, state);
            }
        }
    }

    /// Pointer pressed on a cell
    pub fn pointer_down<V: PuzzleView + ?Sized>(&mut self, cell: Coord, view: &mut V) {
        self.selection.begin_selection(cell);
        self.dispatch(view);
    }

    /// Pointer entered a cell; only matters while dragging
    pub fn pointer_enter<V: PuzzleView + ?Sized>(&mut self, cell: Coord, view: &mut V) {
        if self.selection.is_selecting() {
            self.selection.extend_selection(cell);
            self.dispatch(view);
        }
    }

    /// Pointer released; resolves the drag
    pub fn pointer_up<V: PuzzleView + ?Sized>(&mut self, view: &mut V) -> Resolution {
        let resolution = self.selection.end_selection(self.puzzle.grid());
        if resolution != Resolution::NoSelection {
            view.word_resolved(&resolution);
        }
        self.dispatch(view);
        resolution
    }

    /// Pointer left the puzzle surface
    pub fn pointer_leave_surface<V: PuzzleView + ?Sized>(&mut self, view: &mut V) {
        if self.selection.cancel_on_leave() {
            log::debug!("Drag abandoned: pointer left the grid");
        }
        self.dispatch(view);
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    #[inline]
    #[must_use]
    pub const fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    fn dispatch<V: PuzzleView + ?Sized>(&mut self, view: &mut V) {
        for event in self.selection.take_events() {
            match event {
                SelectionEvent::CellChanged { coord, state } => view.set_cell_state(coord, state),
                SelectionEvent::WordFound { word } => {
                    log::info!(
                        "Found \"{word}\" ({}/{})",
                        self.selection.found_words().len(),
                        self.selection.target()
                    );
                }
                SelectionEvent::WordRejected { candidate } => {
                    log::debug!("Rejected \"{candidate}\"");
                }
                SelectionEvent::PuzzleComplete => {
                    log::info!("Puzzle complete");
                    view.notify_puzzle_complete();
                }
            }
        }
    }
}

fn engine_for(puzzle: &Puzzle) -> SelectionEngine {
    SelectionEngine::new(puzzle.grid().size(), puzzle.words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PlacementMode;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(list: &[&str], size: usize, count: usize, seed: u64) -> PuzzleSession<StdRng> {
        let config = PuzzleConfig::new(size, count, PlacementMode::from_name("scan"));
        PuzzleSession::new(words_from_slice(list), config, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn solve_word(
        session: &mut PuzzleSession<StdRng>,
        index: usize,
        view: &mut RecordingView,
    ) -> Resolution {
        let cells: Vec<Coord> = session.puzzle().placed()[index].placement.cells().collect();
        let (first, rest) = cells.split_first().unwrap();
        session.pointer_down(*first, view);
        for &cell in rest {
            session.pointer_enter(cell, view);
        }
        session.pointer_up(view)
    }

    #[test]
    fn present_renders_grid_and_word_list() {
        let session = session(&["CAT"], 3, 1, 0);
        let mut view = RecordingView::default();
        session.present(&mut view);

        assert_eq!(view.grids.len(), 1);
        assert_eq!(view.grids[0], *session.grid());
        assert_eq!(view.word_lists, vec![vec!["CAT".to_string()]]);
        assert!(view.cell_changes.is_empty());
    }

    #[test]
    fn dragging_a_placed_word_finds_it_and_completes() {
        let mut session = session(&["CAT"], 3, 1, 1);
        let mut view = RecordingView::default();

        let resolution = solve_word(&mut session, 0, &mut view);

        assert_eq!(resolution, Resolution::Found("CAT".to_string()));
        assert!(session.is_complete());
        assert_eq!(view.completions, 1);
        assert_eq!(view.resolutions, vec![Resolution::Found("CAT".to_string())]);
        let found: Vec<Coord> = view
            .cell_changes
            .iter()
            .filter(|(_, s)| *s == CellState::Found)
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn completion_notifies_once_across_repeat_finds() {
        let mut session = session(&["CAT"], 3, 1, 2);
        let mut view = RecordingView::default();

        solve_word(&mut session, 0, &mut view);
        let again = solve_word(&mut session, 0, &mut view);

        assert_eq!(again, Resolution::AlreadyFound("CAT".to_string()));
        assert_eq!(view.completions, 1);
        assert_eq!(session.selection().found_words().len(), 1);
    }

    #[test]
    fn enter_without_down_is_ignored() {
        let mut session = session(&["CAT"], 3, 1, 3);
        let mut view = RecordingView::default();

        session.pointer_enter(Coord::new(0, 0), &mut view);
        assert!(view.cell_changes.is_empty());
        assert_eq!(session.pointer_up(&mut view), Resolution::NoSelection);
        assert!(view.resolutions.is_empty());
    }

    #[test]
    fn leaving_surface_clears_selected_cells() {
        let mut session = session(&["CAT"], 3, 1, 4);
        let mut view = RecordingView::default();

        session.pointer_down(Coord::new(1, 1), &mut view);
        session.pointer_leave_surface(&mut view);

        assert_eq!(
            view.cell_changes,
            vec![
                (Coord::new(1, 1), CellState::Selected),
                (Coord::new(1, 1), CellState::Normal),
            ]
        );
        assert!(!session.selection().is_selecting());
    }

    #[test]
    fn new_puzzle_resets_found_words() {
        let mut session = session(WORDS, 10, 10, 5);
        let mut view = RecordingView::default();

        solve_word(&mut session, 0, &mut view);
        assert_eq!(session.selection().found_words().len(), 1);

        session.new_puzzle(&mut view).unwrap();
        assert!(session.selection().found_words().is_empty());
        assert!(!session.is_complete());
        assert_eq!(view.grids.len(), 1);
        assert_eq!(view.word_lists.len(), 1);
        assert!(
            session
                .grid()
                .cells()
                .all(|(c, _)| session.selection().cell_state(c) == CellState::Normal)
        );
    }

    #[test]
    fn finding_every_placed_word_completes_a_full_puzzle() {
        for seed in 0..20 {
            let mut session = session(WORDS, 10, 10, seed);
            let mut view = RecordingView::default();
            let placed = session.puzzle().placed().len();

            for index in 0..placed {
                let resolution = solve_word(&mut session, index, &mut view);
                assert!(matches!(
                    resolution,
                    Resolution::Found(_) | Resolution::AlreadyFound(_)
                ));
            }

            assert!(session.is_complete());
            assert_eq!(view.completions, 1);
            assert_eq!(session.selection().found_words().len(), session.selection().target());
        }
    }

    #[test]
    fn failed_generation_keeps_current_puzzle() {
        let mut session = session(&["CAT"], 3, 1, 6);
        session.master.clear();
        let before = session.grid().clone();
        let mut view = RecordingView::default();

        assert!(session.new_puzzle(&mut view).is_err());
        assert_eq!(*session.grid(), before);
        assert!(view.grids.is_empty());
    }
}
