//! Line-oriented prompts over any reader and writer.

use crate::error::ConsoleError;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Prompts and replies over a pair of streams.
///
/// The binary wraps stdin and stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and returns the next line with surrounding whitespace
    /// removed.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::EndOfInput`] once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(prompt, "Input closed");
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the reply parses as a whole number.
    ///
    /// Range is not checked here; the engine decides what is on the board.
    /// Numbers too large for an `i32` saturate, so they still reach the engine
    /// and come back as off the board.
    #[instrument(skip(self))]
    pub fn ask_number(&mut self, prompt: &str) -> Result<i32, ConsoleError> {
        loop {
            let reply = self.ask(prompt)?;
            match reply.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Ok(i32::MAX),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => return Ok(i32::MIN),
                Err(e) => {
                    debug!(%reply, error = %e, "Not a number");
                    self.say("Please enter a whole number.")?;
                }
            }
        }
    }

    /// Asks a yes/no question. Only "yes", in any case, counts as yes.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        let reply = self.ask(prompt)?;
        Ok(reply.eq_ignore_ascii_case("yes"))
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
