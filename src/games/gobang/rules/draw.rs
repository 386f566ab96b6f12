//! Draw detection logic for gobang.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner indicates a draw. Marks are never removed,
/// so the board's running empty count answers this without a scan.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.empty_count() == 0
}
