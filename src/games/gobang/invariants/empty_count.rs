//! Empty count invariant: the board's running counter agrees with its cells.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: the cached empty-cell count equals a full scan of the board.
///
/// Draw detection relies on the counter instead of rescanning.
pub struct EmptyCountInvariant;

impl Invariant<GameState> for EmptyCountInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let scanned = board.cells().iter().filter(|c| **c == Cell::Empty).count();
        scanned == board.empty_count()
    }

    fn description() -> &'static str {
        "Empty-cell counter matches the board"
    }
}
