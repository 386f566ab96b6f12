//! Win detection logic for gobang.
//!
//! Only the cell just played can complete a new line, so every check is
//! rooted at that cell and walks the four axes through it.

use super::super::{Board, Cell, Player, Position, WIN_LENGTH};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line through a cell, walked in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(dr, dc)` in the positive direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Collects consecutive `player` marks starting one step from `pos`.
fn walk(board: &Board, pos: Position, player: Player, (dr, dc): (isize, isize)) -> Vec<Position> {
    std::iter::successors(pos.offset(dr, dc, board.size()), |p| {
        p.offset(dr, dc, board.size())
    })
    .take_while(|p| board.get(*p) == Some(Cell::Occupied(player)))
    .collect()
}

/// Length of the run of `player` marks through `pos` along `axis`, counting `pos` itself.
#[instrument(skip(board))]
pub fn run_length(board: &Board, pos: Position, player: Player, axis: Axis) -> usize {
    let (dr, dc) = axis.delta();
    1 + walk(board, pos, player, (dr, dc)).len() + walk(board, pos, player, (-dr, -dc)).len()
}

/// Checks whether the mark at `pos` is part of five or more in a row.
///
/// Overlines count: six or more aligned marks also win.
#[instrument(skip(board))]
pub fn check_win(board: &Board, pos: Position, player: Player) -> bool {
    Axis::iter().any(|axis| run_length(board, pos, player, axis) >= WIN_LENGTH)
}

/// Returns the winning run through `pos`, ordered from its negative end.
///
/// Only the first axis reaching the threshold is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, pos: Position, player: Player) -> Option<Vec<Position>> {
    Axis::iter().find_map(|axis| {
        let (dr, dc) = axis.delta();
        let mut line = walk(board, pos, player, (-dr, -dc));
        line.reverse();
        line.push(pos);
        line.extend(walk(board, pos, player, (dr, dc)));
        (line.len() >= WIN_LENGTH).then_some(line)
    })
}
