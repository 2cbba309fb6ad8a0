//! Two-player tic-tac-toe at the terminal.
//!
//! A [`Session`] reads player names, runs games on a
//! [`GameEngine`](tictactoe_engine::GameEngine), and offers a rematch after
//! each one. All text goes through a [`Console`], so any `BufRead`/`Write`
//! pair can stand in for stdin and stdout.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{Console, Players, Session};
//!
//! let moves = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nno\n";
//! let console = Console::new(Cursor::new(moves), Vec::new());
//! let mut session = Session::new(console, Players::new("Ada", "Grace"));
//! session.run().unwrap();
//!
//! let output = String::from_utf8(session.into_console().into_output()).unwrap();
//! assert!(output.contains("Ada has won the game!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use console::Console;
pub use error::ConsoleError;
pub use session::{Players, Session};
