//! Properties every reachable engine state satisfies.
//!
//! The engine checks them in debug builds after each accepted move. They are
//! public so tests can check states directly.

use crate::{Board, GameEngine, Mark, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Engine invariants violated");
            Err(violations)
        }
    }
}

/// Replaying the move history onto an empty board yields the current board,
/// and no move in it landed on a filled square.
pub struct HistoryReplaysToBoard;

impl Invariant<GameEngine> for HistoryReplaysToBoard {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mov in engine.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.mark));
        }
        &replayed == engine.board()
    }

    fn description() -> &'static str {
        "Move history does not replay to the current board"
    }
}

/// X moves first and the marks alternate.
pub struct AlternatingMarks;

impl Invariant<GameEngine> for AlternatingMarks {
    fn holds(engine: &GameEngine) -> bool {
        let mut expected = Mark::X;
        for mov in engine.history() {
            if mov.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }
        engine.is_over() || engine.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks do not alternate starting with X"
    }
}

/// The turn counter equals the number of filled squares.
pub struct TurnCountMatchesBoard;

impl Invariant<GameEngine> for TurnCountMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        usize::from(engine.turn()) == engine.board().filled()
            && engine.history().len() == engine.board().filled()
    }

    fn description() -> &'static str {
        "Turn counter does not match filled squares"
    }
}

/// Every engine invariant.
pub type EngineInvariants = (HistoryReplaysToBoard, AlternatingMarks, TurnCountMatchesBoard);
