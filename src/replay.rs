//! Move files: one `row col` pair per line.
//!
//! Blank lines and lines starting with `#` are skipped. Row and column may be
//! separated by whitespace or a comma. Any integer parses; negative or oversized
//! coordinates are left for the engine to reject as out of bounds.

use crate::games::gobang::{Game, MoveError, MoveOutcome};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A parsed move together with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLine {
    /// One-based line number in the input.
    pub line: usize,
    /// Target row.
    pub row: i64,
    /// Target column.
    pub col: i64,
}

/// Error raised while replaying a move file.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A line could not be read as a `row col` pair.
    #[display("Line {}: expected `row col`, got {:?}", line, text)]
    Parse {
        /// One-based line number.
        line: usize,
        /// Offending text.
        text: String,
    },
    /// The engine rejected a move.
    #[display("Line {}: {}", line, source)]
    Move {
        /// One-based line number.
        line: usize,
        /// Rejection reason.
        source: MoveError,
    },
}

/// Parses a single `row col` (or `row,col`) pair.
pub fn parse_move(text: &str) -> Option<(i64, i64)> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row: i64 = parts.next()?.parse().ok()?;
    let col: i64 = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

/// Parses every move in `input`, failing on the first malformed line.
#[instrument(skip(input))]
pub fn parse_moves(input: &str) -> Result<Vec<MoveLine>, ReplayError> {
    input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            parse_move(text)
                .map(|(row, col)| MoveLine { line, row, col })
                .ok_or_else(|| ReplayError::Parse {
                    line,
                    text: text.to_string(),
                })
        })
        .collect()
}

/// Applies every move in `input` to `game`, stopping at the first rejection.
///
/// Returns the outcome of the last move, or `None` if the input had no moves.
#[instrument(skip(game, input))]
pub fn replay(game: &mut Game, input: &str) -> Result<Option<MoveOutcome>, ReplayError> {
    let moves = parse_moves(input)?;
    debug!(count = moves.len(), "Replaying moves");

    let mut last = None;
    for mv in moves {
        let outcome = game
            .apply_move(mv.row, mv.col)
            .map_err(|source| ReplayError::Move {
                line: mv.line,
                source,
            })?;
        last = Some(outcome);
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gobang::Player;

    #[test]
    fn test_parse_move_separators() {
        assert_eq!(parse_move("7 7"), Some((7, 7)));
        assert_eq!(parse_move("3,14"), Some((3, 14)));
        assert_eq!(parse_move(" 0 ,  1 "), Some((0, 1)));
        assert_eq!(parse_move("-1 3"), Some((-1, 3)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move("7"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("1.5 3"), None);
        assert_eq!(parse_move("1 2 3"), None);
    }

    #[test]
    fn test_parse_moves_skips_comments() {
        let moves = parse_moves("# opening\n7 7\n\n7 8\n").unwrap();
        assert_eq!(
            moves,
            vec![
                MoveLine { line: 2, row: 7, col: 7 },
                MoveLine { line: 4, row: 7, col: 8 },
            ]
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_moves("1 1\noops\n").unwrap_err();
        assert_eq!(
            err,
            ReplayError::Parse {
                line: 2,
                text: "oops".to_string()
            }
        );
    }

    #[test]
    fn test_replay_to_win() {
        let mut game = Game::default();
        let input = "7 0\n0 0\n7 1\n0 1\n7 2\n0 2\n7 3\n0 3\n7 4\n";
        assert_eq!(replay(&mut game, input), Ok(Some(MoveOutcome::Win(Player::Black))));
    }

    #[test]
    fn test_replay_stops_at_rejected_move() {
        let mut game = Game::default();
        let err = replay(&mut game, "0 0\n0 0\n1 1\n").unwrap_err();
        assert_eq!(
            err,
            ReplayError::Move {
                line: 2,
                source: MoveError::CellOccupied((0, 0).into())
            }
        );
        assert_eq!(game.board().empty_count(), 224);
    }

    #[test]
    fn test_replay_negative_coordinate_out_of_bounds() {
        let mut game = Game::default();
        let err = replay(&mut game, "-1 3\n").unwrap_err();
        assert_eq!(
            err,
            ReplayError::Move {
                line: 1,
                source: MoveError::OutOfBounds {
                    row: -1,
                    col: 3,
                    size: 15
                }
            }
        );
        assert_eq!(game.board().empty_count(), 225);
    }

    #[test]
    fn test_replay_empty_input() {
        let mut game = Game::default();
        assert_eq!(replay(&mut game, "# nothing\n"), Ok(None));
    }
}
