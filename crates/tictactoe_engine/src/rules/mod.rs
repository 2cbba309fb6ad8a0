//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state, so the
//! engine and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::{MAX_TURNS, is_draw};
pub use win::{LINES, check_winner};
