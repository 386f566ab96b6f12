//! Mark balance invariant: Black never trails White and never leads by more than one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: black mark count minus white mark count is 0 or 1.
///
/// Black moves first and players alternate, so any other difference means
/// a player moved twice.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let black = state.board().count(Player::Black);
        let white = state.board().count(Player::White);
        black == white || black == white + 1
    }

    fn description() -> &'static str {
        "Black has the same number of marks as White, or one more"
    }
}
