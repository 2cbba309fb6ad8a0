//! Moves and the errors a placement can fail with.

use super::{GameStatus, Mark, Position};
use derive_new::new;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// An accepted placement and the game status it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Placement {
    /// The move that was applied.
    pub action: Move,
    /// Status of the game after the move.
    pub status: GameStatus,
}

/// Reasons a placement is rejected.
///
/// Every variant is recoverable: a rejected placement leaves the board and
/// turn counter untouched, so the caller can simply ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// Row or column outside 0-2.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Target square already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game reached a win or draw; call `reset` first.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the side to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),
}
