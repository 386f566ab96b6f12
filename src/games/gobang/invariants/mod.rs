//! First-class invariants for gobang.
//!
//! Invariants are logical properties that must hold throughout a game.
//! The engine asserts them after every move in debug builds, and each one
//! can be tested on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants; every violation is reported, not
/// just the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod empty_count;
pub mod mark_balance;
pub mod turn_parity;

pub use empty_count::EmptyCountInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use turn_parity::TurnParityInvariant;

/// All gobang invariants as a composable set.
pub type GobangInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    EmptyCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gobang::{Game, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::default();
        assert!(GobangInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::default();
        for (row, col) in [(7, 7), (7, 8), (8, 8), (6, 6), (0, 14)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(GobangInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = Game::default().state().clone();
        // Three black marks with Black still to move breaks balance and parity.
        state.place_mark(Position::new(0, 0));
        state.place_mark(Position::new(0, 1));
        state.place_mark(Position::new(0, 2));
        assert_eq!(state.current_player(), Player::Black);

        let violations = GobangInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::default();
        type TwoInvariants = (MarkBalanceInvariant, EmptyCountInvariant);
        assert!(TwoInvariants::check_all(game.state()).is_ok());
    }
}
