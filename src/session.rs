//! Game session: one local game bound to one synchronizer handle.

use tracing::{info, instrument};

use crate::game::{Game, GameState, GameStatus, IllegalMove, Player};
use crate::sync::{SyncEvent, SyncHandle, SyncStatus};

/// A single playthrough's local state plus its remote linkage.
///
/// All mutation goes through this type so that every transition is
/// published to the synchronizer. The session object is owned by one
/// view; no concurrent mutation path exists.
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    sync: SyncHandle,
}

impl GameSession {
    /// Creates a session over a running synchronizer.
    #[instrument(skip(sync))]
    pub fn new(sync: SyncHandle) -> Self {
        Self {
            game: Game::new(),
            sync,
        }
    }

    /// Starts a new game: requests a remote record and resets locally.
    ///
    /// The local reset happens regardless of the remote outcome, so a
    /// backend outage never blocks play. An unmirrored session simply
    /// stays unmirrored.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!("Starting new game session");
        self.sync.send(SyncEvent::SessionStarted {
            first_player: Player::X,
        });
        self.game.reset();
    }

    /// Applies the current player's move and mirrors the result.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] unchanged from the engine; rejected
    /// moves emit no sync event.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, IllegalMove> {
        let mover = self.game.state().current_player();
        self.game.apply_move(index)?;

        self.sync.send(SyncEvent::MoveApplied {
            board: self.game.state().board().clone(),
            player: mover,
        });
        Ok(self.game.state().status().clone())
    }

    /// Local-only reset; keeps whatever remote record the session had.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Returns a snapshot of the synchronizer status.
    pub fn sync_status(&self) -> SyncStatus {
        self.sync.status()
    }

    /// Returns a handle to the synchronizer for subscriptions.
    pub fn sync(&self) -> &SyncHandle {
        &self.sync
    }
}
