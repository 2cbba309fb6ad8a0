//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Moves in a full game.
pub const MAX_TURNS: u8 = 9;

/// A draw is a finished game with no complete line.
///
/// `turns` is the number of accepted moves; the board is exhausted once it
/// reaches [`MAX_TURNS`].
#[instrument(skip(board))]
pub fn is_draw(board: &Board, turns: u8) -> bool {
    turns >= MAX_TURNS && check_winner(board).is_none()
}
