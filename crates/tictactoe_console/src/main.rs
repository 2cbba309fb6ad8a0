//! Tic-tac-toe - console entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Console, ConsoleConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?.apply_overrides(
        cli.player_x,
        cli.player_o,
        cli.log_filter,
    );

    initialize_tracing(&config);
    info!("Starting tic-tac-toe");

    run(&config)
}

#[instrument(skip(config))]
fn run(config: &ConsoleConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::start(console, config)?;
    session.run()?;

    info!("Session ended");
    Ok(())
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing(config: &ConsoleConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
