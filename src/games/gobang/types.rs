//! Core domain types for gobang.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board dimension used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Largest board dimension accepted.
pub const MAX_BOARD_SIZE: usize = 255;

/// Number of aligned marks needed to win.
pub const WIN_LENGTH: usize = 5;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Black (moves first).
    Black,
    /// White (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Square N×N gobang board, stored row-major.
///
/// Deserialized input is rebuilt through [`RawBoard`], so the cell count and
/// the empty counter always agree with `size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Cells still `Empty`; marks are never removed so this only decreases.
    empty: usize,
}

/// Error for a board dimension outside `1..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSizeError {
    /// A board needs at least one cell.
    #[display("Board size must be at least 1")]
    Zero,
    /// The board would be unreasonably large.
    #[display("Board size {} exceeds the maximum of {}", size, MAX_BOARD_SIZE)]
    TooLarge {
        /// Requested dimension.
        size: usize,
    },
    /// The cell list does not hold `size * size` cells.
    #[display("Board of size {} needs {} cells, got {}", size, size * size, cells)]
    CellCount {
        /// Declared dimension.
        size: usize,
        /// Cells actually supplied.
        cells: usize,
    },
}

/// Unchecked wire form of a [`Board`].
#[derive(Debug, Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardSizeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let len = Board::cell_count(raw.size)?;
        if raw.cells.len() != len {
            return Err(BoardSizeError::CellCount {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        let empty = raw.cells.iter().filter(|c| **c == Cell::Empty).count();
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
            empty,
        })
    }
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] unless `1 <= size <= MAX_BOARD_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        let len = Self::cell_count(size)?;
        Ok(Self::empty_of(size, len))
    }

    /// Checks `size` and returns the number of cells it needs.
    pub fn cell_count(size: usize) -> Result<usize, BoardSizeError> {
        if size == 0 {
            return Err(BoardSizeError::Zero);
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardSizeError::TooLarge { size });
        }
        size.checked_mul(size).ok_or(BoardSizeError::TooLarge { size })
    }

    fn empty_of(size: usize, len: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; len],
            empty: len,
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos.row, pos.col)
            .then(|| pos.row * self.size + pos.col)
    }

    /// Gets the cell at the given position, `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Places a mark on an empty cell, returning whether it was written.
    ///
    /// An off-board or occupied target is left alone.
    pub(super) fn place(&mut self, pos: Position, player: Player) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = Cell::Occupied(player);
                self.empty -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid with row and column indices.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..self.size {
            result.push_str(&format!("{:>3}", col));
        }
        result.push('\n');
        for (row, cells) in self.rows().enumerate() {
            result.push_str(&format!("{:>3}", row));
            for cell in cells {
                result.push_str(&format!("{:>3}", cell.symbol()));
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty_of(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Serialize-only; presentation layers read it through `GameSnapshot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Most recently placed mark.
    last_move: Option<Position>,
}

impl GameState {
    /// Creates a new game on an empty board of the given size.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Player::Black,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the position of the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Places the current player's mark (unchecked - use Game::apply_move for validation).
    ///
    /// Returns false, leaving the state untouched, if the cell was not empty.
    pub(super) fn place_mark(&mut self, pos: Position) -> bool {
        let placed = self.board.place(pos, self.current_player);
        if placed {
            self.last_move = Some(pos);
        }
        placed
    }

    /// Hands the turn to the other player.
    pub(super) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
