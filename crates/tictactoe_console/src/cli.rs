//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe at the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the player using X (skips the prompt)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player using O (skips the prompt)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Tracing filter when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_filter: Option<String>,
}
