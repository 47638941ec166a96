//! Drag selection and word matching
//!
//! The selection engine turns pointer gestures into a contiguous cell path
//! and resolves released paths against the word list.

mod engine;
mod events;

pub use engine::SelectionEngine;
pub use events::{CellState, Resolution, SelectionEvent, SelectionState};
