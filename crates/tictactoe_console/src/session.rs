//! A console session: names, games, and the replay loop.

use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameStatus, Mark, Placement, PlacementError};
use tracing::{info, instrument, warn};

/// Display names for the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    /// Player 1, using X.
    x: String,
    /// Player 2, using O.
    o: String,
}

impl Players {
    /// Creates a pair of names. Blank names fall back to "Player 1"/"Player 2".
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        fn or_default(name: String, fallback: &str) -> String {
            if name.trim().is_empty() {
                fallback.to_string()
            } else {
                name
            }
        }
        Self {
            x: or_default(x.into(), "Player 1"),
            o: or_default(o.into(), "Player 2"),
        }
    }

    /// Name of the player using `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// Closed input leaves the name blank; the first game prompt then ends the
/// session.
fn ask_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<String, ConsoleError> {
    match console.ask(prompt) {
        Err(ConsoleError::EndOfInput) => Ok(String::new()),
        other => other,
    }
}

/// Drives games between two people sharing one console.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    engine: GameEngine,
    players: Players,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for players whose names are already known.
    pub fn new(console: Console<R, W>, players: Players) -> Self {
        Self {
            console,
            engine: GameEngine::new(),
            players,
        }
    }

    /// Greets the players and collects any names the config left unset.
    ///
    /// # Errors
    ///
    /// Fails if the console cannot be read or written.
    #[instrument(skip_all)]
    pub fn start(mut console: Console<R, W>, config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        console.say("\n========== WELCOME TO TIC-TAC-TOE ==========\n")?;

        let x = match config.player_x() {
            Some(name) => name.clone(),
            None => ask_name(&mut console, "Enter name of Player 1: ")?,
        };
        let o = match config.player_o() {
            Some(name) => name.clone(),
            None => ask_name(&mut console, "Enter name of Player 2: ")?,
        };
        let players = Players::new(x, o);
        info!(x = %players.x, o = %players.o, "Players registered");

        console.say(format!("\n{} will play as 'X'", players.x))?;
        console.say(format!("{} will play as 'O'\n", players.o))?;

        Ok(Self::new(console, players))
    }

    /// Plays games until the players decline a rematch or input runs out,
    /// then says goodbye.
    ///
    /// # Errors
    ///
    /// Fails on console I/O errors. Running out of input is not an error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            match self.play_game() {
                Ok(status) => info!(?status, "Game finished"),
                Err(ConsoleError::EndOfInput) => {
                    warn!("Input closed mid-game");
                    break;
                }
                Err(e) => return Err(e),
            }

            match self.console.confirm("Do you want to play again? (yes/no): ") {
                Ok(true) => self.engine.reset(),
                Ok(false) | Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        self.console.say("\nThank you for playing Tic-Tac-Toe! Goodbye!")
    }

    /// Plays one game from the current board to a win or draw.
    ///
    /// # Errors
    ///
    /// Fails on console errors, including [`ConsoleError::EndOfInput`].
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameStatus, ConsoleError> {
        self.console.say(format!(
            "Game has started between {} and {}",
            self.players.x, self.players.o
        ))?;
        self.show_board()?;

        loop {
            let name = self.players.name(self.engine.to_move()).to_string();
            self.console.say(format!("{}'s turn", name))?;

            let placement = self.take_turn()?;
            self.show_board()?;

            if !placement.status.is_terminal() {
                continue;
            }
            match placement.status.winner() {
                Some(mark) => {
                    let winner = self.players.name(mark).to_string();
                    self.console.say(format!("{} has won the game!", winner))?;
                }
                None => self.console.say("The game is a draw!")?,
            }
            return Ok(placement.status);
        }
    }

    /// Asks for coordinates until the engine accepts a move.
    fn take_turn(&mut self) -> Result<Placement, ConsoleError> {
        loop {
            let row = self.console.ask_number("Enter row (0-2): ")?;
            let col = self.console.ask_number("Enter column (0-2): ")?;

            match self.engine.place(row, col) {
                Ok(placement) => return Ok(placement),
                Err(PlacementError::OutOfBounds { .. }) => {
                    self.console
                        .say("Invalid input. Please enter values between 0 and 2.")?;
                }
                Err(PlacementError::CellOccupied(_)) => {
                    self.console
                        .say("Cell already occupied. Choose another cell.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_board(&mut self) -> Result<(), ConsoleError> {
        self.console.say("Current Board:")?;
        let board = self.engine.board().to_string();
        self.console.say(board.trim_end_matches('\n'))
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
