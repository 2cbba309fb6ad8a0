//! Tic-tac-toe rules engine.
//!
//! [`GameEngine`] owns a 3x3 board, validates placements, and reports wins
//! and draws. It performs no I/O; a driver asks for coordinates, feeds them to
//! [`GameEngine::place`], and shows the result.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.place(row, col).unwrap();
//! }
//! assert_eq!(engine.check_winner(), Some(Mark::X));
//! assert_eq!(engine.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, Placement, PlacementError};
pub use engine::GameEngine;
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Square};
