//! Game engine for gobang.

use super::action::{MoveError, MoveOutcome};
use super::invariants::{GobangInvariants, InvariantSet};
use super::rules::{check_draw, check_win, winning_line};
use super::snapshot::GameSnapshot;
use super::types::{Board, BoardSizeError, GameState, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument, warn};

/// Gobang game engine.
///
/// Owns the whole game state; every mutation goes through [`Game::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game on an empty `size`×`size` board with Black to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] unless `1 <= size <= MAX_BOARD_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Ok(Self {
            state: GameState::new(size)?,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose turn it is.
    ///
    /// Frozen at the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Coordinates are signed so that negative input from a caller surfaces
    /// as [`MoveError::OutOfBounds`] like any other off-board move.
    ///
    /// # Errors
    ///
    /// Checked in this order, before anything is written:
    /// - [`MoveError::GameAlreadyOver`] if the game was already won or drawn
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        let pos = self.validate(row, col).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let player = self.state.current_player();
        let placed = self.state.place_mark(pos);
        debug_assert!(placed, "validated target {} was not empty", pos);

        let outcome = if check_win(self.state.board(), pos, player) {
            self.state.set_status(GameStatus::Won(player));
            info!(%player, %pos, "Game won");
            MoveOutcome::Win(player)
        } else if check_draw(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.state.pass_turn();
            MoveOutcome::Continue(self.state.current_player())
        };

        debug!(%pos, %outcome, "Move applied");
        debug_assert!(
            GobangInvariants::check_all(&self.state).is_ok(),
            "Game invariants violated after move"
        );
        Ok(outcome)
    }

    fn validate(&self, row: i64, col: i64) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let board = self.state.board();
        let pos = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if board.contains(r, c) => Position::new(r, c),
            _ => {
                return Err(MoveError::OutOfBounds {
                    row,
                    col,
                    size: board.size(),
                });
            }
        };

        if !board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        Ok(pos)
    }

    /// Returns the winning run once the game has been won.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<Vec<Position>> {
        match (self.state.status(), self.state.last_move()) {
            (GameStatus::Won(player), Some(pos)) => winning_line(self.state.board(), pos, player),
            _ => None,
        }
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            state: GameState::default(),
        }
    }
}
