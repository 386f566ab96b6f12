//! Serializable view of a game for presentation layers.

use super::position::Position;
use super::types::{GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a renderer needs.
///
/// Rows use `.` for empty cells, `X` for Black and `O` for White.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board dimension.
    pub size: usize,
    /// One string per row, top to bottom.
    pub rows: Vec<String>,
    /// Player to move (the last mover once the game is over).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Most recently placed mark.
    pub last_move: Option<Position>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let board = state.board();
        Self {
            size: board.size(),
            rows: board
                .rows()
                .map(|row| row.iter().map(|c| c.symbol()).collect())
                .collect(),
            current_player: state.current_player(),
            status: state.status(),
            last_move: state.last_move(),
        }
    }
}
