//! Core domain types for the tic-tac-toe board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl From<Option<Player>> for Square {
    fn from(value: Option<Player>) -> Self {
        match value {
            Some(player) => Square::Occupied(player),
            None => Square::Empty,
        }
    }
}

impl From<Square> for Option<Player> {
    fn from(value: Square) -> Self {
        match value {
            Square::Occupied(player) => Some(player),
            Square::Empty => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as the backend's wire form: a 9-element array of
/// `"X"`, `"O"`, or `null`, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Option<Player>; 9]", into = "[Option<Player>; 9]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: usize, square: Square) {
        if pos < 9 {
            self.squares[pos] = square;
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the board in wire form.
    pub fn cells(&self) -> [Option<Player>; 9] {
        self.squares.map(Into::into)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Option<Player>; 9]> for Board {
    fn from(cells: [Option<Player>; 9]) -> Self {
        Self {
            squares: cells.map(Into::into),
        }
    }
}

impl From<Board> for [Option<Player>; 9] {
    fn from(board: Board) -> Self {
        board.cells()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed triple, in board indices.
        line: [usize; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`; `InProgress` is the only non-terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Writes a symbol (unchecked - use `Game::apply_move` for validation).
    pub(super) fn place(&mut self, pos: usize, player: Player) {
        self.board.set(pos, Square::Occupied(player));
    }

    /// Flips the turn to the other player.
    pub(super) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
