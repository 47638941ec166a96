//! Selection states, cell styles and emitted events

use crate::core::Coord;

/// Drag state of the selection engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
}

/// Visual state of a grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Normal,
    /// Part of the drag in progress
    Selected,
    /// Part of a found word; never reverts for the rest of the puzzle
    Found,
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    CellChanged { coord: Coord, state: CellState },
    WordFound { word: String },
    WordRejected { candidate: String },
    /// Emitted once, when the last word is found
    PuzzleComplete,
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A new word was found (display text)
    Found(String),
    /// The selection spelled a word that was already found
    AlreadyFound(String),
    /// The selection spelled nothing on the list (the candidate letters)
    NotFound(String),
    /// Released without an active drag
    NoSelection,
}
