//! Console error types.

use derive_more::{Display, Error, From};
use tictactoe_engine::PlacementError;

/// Errors raised while talking to the players.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[display("Console I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input closed before an answer arrived.
    #[display("Input ended")]
    EndOfInput,

    /// The engine refused a move the driver should never send.
    #[display("Rejected move: {}", _0)]
    #[from]
    Rules(PlacementError),
}
