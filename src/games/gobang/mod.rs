mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use game::Game;
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use types::{
    Board, BoardSizeError, Cell, DEFAULT_BOARD_SIZE, GameState, GameStatus, MAX_BOARD_SIZE, Player,
    WIN_LENGTH,
};
