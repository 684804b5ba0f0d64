//! Game state machine.

use super::rules;
use super::types::{GameState, GameStatus};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A rejected move, with the reason it was rejected.
///
/// Rejections never mutate the game: board, current player, and status
/// are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
    /// The index is outside the board.
    #[display("position {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
    /// The target square is occupied.
    #[display("position {index} is already occupied")]
    Occupied {
        /// The rejected index.
        index: usize,
    },
}

/// Tic-tac-toe game engine.
///
/// A pure, synchronous transition function over in-memory state: it
/// performs no I/O and never suspends. `InProgress` is the only state
/// moves are accepted in; `Won` and `Draw` are left only via
/// [`reset`](Game::reset).
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies the current player's move at the given position (0-8).
    ///
    /// On success exactly one square changes from empty to the mover's
    /// symbol and the status reflects the evaluator's verdict on the
    /// post-move board. The turn only advances when the game stays in
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the game is over, the index is out
    /// of range, or the square is occupied. The state is untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<&GameStatus, IllegalMove> {
        if self.state.status().is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if index >= 9 {
            return Err(IllegalMove::OutOfBounds { index });
        }
        if !self.state.board().is_empty(index) {
            return Err(IllegalMove::Occupied { index });
        }

        let mover = self.state.current_player();
        self.state.place(index, mover);

        if let Some(win) = rules::check_winner(self.state.board()) {
            debug!(winner = %win.winner(), line = ?win.line(), "Game won");
            self.state.set_status(GameStatus::Won {
                winner: *win.winner(),
                line: *win.line(),
            });
        } else if rules::is_full(self.state.board()) {
            debug!("Board full, game drawn");
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.advance_turn();
        }

        Ok(self.state.status())
    }

    /// Reinitializes to the fresh session state, from any status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }
}
