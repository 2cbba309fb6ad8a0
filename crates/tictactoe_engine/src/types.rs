//! Core domain types for tic-tac-toe.

use super::position::Position;
use std::fmt;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Player 1's mark (moves first).
    X,
    /// Player 2's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character drawn on the board for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Mark),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding a mark.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            for (col, square) in cells.iter().enumerate() {
                write!(f, " {} ", square.symbol())?;
                if col < 2 {
                    write!(f, " | ")?;
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "----------------")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_renders_grid() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::Center, Square::Occupied(Mark::O));

        let expected = concat!(
            " X  |     |    \n",
            "----------------\n",
            "    |  O  |    \n",
            "----------------\n",
            "    |     |    \n",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::new();
        board.set(Position::BottomRight, Square::Occupied(Mark::O));
        assert_eq!(board.filled(), 1);

        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_winner_only_for_won_status() {
        assert_eq!(GameStatus::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::InProgress.winner(), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
