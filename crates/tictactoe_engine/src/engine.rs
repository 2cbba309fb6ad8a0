//! The game engine: owns the board and enforces the rules.

use crate::action::{Move, Placement, PlacementError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules;
use crate::{Board, GameStatus, Mark, Position, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// One value holds a whole game: the board, the number of moves played, the
/// side to move and the status. A won or drawn game accepts no further moves
/// until [`GameEngine::reset`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: u8,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::GameOver`] if the game already ended.
    /// - [`PlacementError::OutOfBounds`] if `row` or `col` is outside 0-2.
    /// - [`PlacementError::CellOccupied`] if the square holds a mark.
    /// - [`PlacementError::WrongTurn`] if `mark` is not the side to move.
    ///
    /// A rejected placement changes nothing.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn validate_and_place(
        &mut self,
        row: i32,
        col: i32,
        mark: Mark,
    ) -> Result<Placement, PlacementError> {
        if self.status.is_terminal() {
            return Err(PlacementError::GameOver);
        }

        let position =
            Position::from_row_col(row, col).ok_or(PlacementError::OutOfBounds { row, col })?;

        if !self.board.is_empty(position) {
            return Err(PlacementError::CellOccupied(position));
        }

        if mark != self.to_move {
            return Err(PlacementError::WrongTurn(mark));
        }

        let action = Move::new(mark, position);
        self.board.set(position, Square::Occupied(mark));
        self.history.push(action);
        self.turn += 1;
        self.status = self.evaluate();
        if !self.status.is_terminal() {
            self.to_move = mark.opponent();
        }

        debug!(%action, status = ?self.status, "Move applied");
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {}",
            action
        );

        Ok(Placement::new(action, self.status))
    }

    /// Places the mark of the side to move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// As [`GameEngine::validate_and_place`], except `WrongTurn`.
    pub fn place(&mut self, row: i32, col: i32) -> Result<Placement, PlacementError> {
        self.validate_and_place(row, col, self.to_move)
    }

    /// Mark of the first complete line, checking rows, columns, then diagonals.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// True once nine moves have been played without a winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board, self.turn)
    }

    /// Clears the board and starts a fresh game with X to move.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn reset(&mut self) {
        info!(status = ?self.status, "Resetting game");
        self.board.clear();
        self.turn = 0;
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn evaluate(&self) -> GameStatus {
        if let Some(winner) = self.check_winner() {
            GameStatus::Won(winner)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played in the current game (0-9).
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Mark of the side to move. After a win this stays on the winner.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves played in the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions still open.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
