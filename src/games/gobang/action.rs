//! Move outcomes and errors.
//!
//! A move is validated completely before anything is written, so every
//! `MoveError` leaves the game exactly as it was.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The move completed five or more in a row.
    #[display("{} wins", _0)]
    Win(Player),
    /// The move filled the last empty cell without a win.
    #[display("Draw")]
    Draw,
    /// The game goes on; the contained player moves next.
    #[display("{} to move", _0)]
    Continue(Player),
}

impl MoveOutcome {
    /// Returns true if this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue(_))
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The coordinate lies outside the board.
    #[display("Position ({}, {}) is out of bounds (board is {}x{})", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Board dimension.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}
