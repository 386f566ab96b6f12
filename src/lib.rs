//! Gobang library - five-in-a-row rules engine
//!
//! A pure, synchronous state machine for two players taking turns on an
//! N×N board. The first player to line up five or more marks horizontally,
//! vertically or diagonally wins; a full board without such a line is a draw.
//!
//! # Architecture
//!
//! - **Game**: owns the board, the turn and the status; the only mutator is
//!   [`Game::apply_move`]
//! - **Rules**: pure win and draw checks over a [`Board`]
//! - **Invariants**: state properties asserted after every move in debug builds
//! - **Snapshot**: serializable view for presentation layers
//!
//! # Example
//!
//! ```
//! use gobang::{Game, MoveError, MoveOutcome, Player};
//!
//! let mut game = Game::default();
//! assert_eq!(game.apply_move(7, 7), Ok(MoveOutcome::Continue(Player::White)));
//! assert_eq!(
//!     game.apply_move(7, 7),
//!     Err(MoveError::CellOccupied((7, 7).into()))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod games;
mod replay;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Move files
pub use replay::{MoveLine, ReplayError, parse_move, parse_moves, replay};

// Crate-level exports - Game types
pub use games::gobang::{
    Board, BoardSizeError, Cell, DEFAULT_BOARD_SIZE, Game, GameSnapshot, GameState, GameStatus,
    MAX_BOARD_SIZE, MoveError, MoveOutcome, Player, Position, WIN_LENGTH, invariants, rules,
};
