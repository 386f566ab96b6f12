//! Turn parity invariant: Black is to move exactly when an even number of marks is down.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: while the game is in progress, `current_player` matches mark parity.
///
/// Terminal states are exempt since the turn is frozen at the last mover.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }

        let board = state.board();
        let marks = board.cells().len() - board.empty_count();
        let expected = if marks % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (Black, White, Black, ...)"
    }
}
