//! Best-effort persistence synchronizer.
//!
//! The state machine never performs I/O. Instead, each transition is
//! published as a [`SyncEvent`] on an unbounded channel; a background
//! worker consumes events in order and mirrors them to the remote
//! store. Failures are logged and dropped: no retry, no rollback, and
//! gameplay is never blocked. Local state stays authoritative.

use async_trait::async_trait;
use derive_getters::Getters;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::game::{Board, Player};
use crate::remote::{GameRecord, RemoteError};

/// Identifier assigned by the remote store on create.
pub type GameId = String;

/// Remote sink for game snapshots.
///
/// Implemented by [`BackendClient`](crate::BackendClient); tests supply
/// scripted doubles.
#[async_trait]
pub trait GameStore: Send + Sync + 'static {
    /// Creates a remote game record, returning its identifier.
    async fn create_game(&self, first_player: Player) -> Result<GameId, RemoteError>;

    /// Mirrors a post-move snapshot to an existing record.
    async fn update_game(
        &self,
        game_id: &str,
        board: &Board,
        player: Player,
    ) -> Result<GameRecord, RemoteError>;
}

/// A state transition to mirror remotely.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// A new session began; request a remote record.
    SessionStarted {
        /// Symbol of the player who moves first.
        first_player: Player,
    },
    /// A legal move was applied locally.
    MoveApplied {
        /// Post-move board snapshot.
        board: Board,
        /// The player who moved (pre-advance).
        player: Player,
    },
}

/// Observable synchronizer state for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SyncStatus {
    /// Remote id of the current session, once a create succeeded.
    /// `None` means the session is unmirrored and no sync will occur.
    remote_id: Option<GameId>,
    /// Message of the most recent remote failure, if any.
    last_error: Option<String>,
}

/// Cheap handle for publishing events and observing sync state.
#[derive(Debug, Clone)]
pub struct SyncHandle {
    events: mpsc::UnboundedSender<SyncEvent>,
    status: watch::Receiver<SyncStatus>,
}

impl SyncHandle {
    /// Enqueues an event without blocking.
    ///
    /// A dead worker is logged and otherwise ignored; the game goes on.
    pub fn send(&self, event: SyncEvent) {
        if self.events.send(event).is_err() {
            warn!("Sync worker is gone, dropping event");
        }
    }

    /// Returns a snapshot of the current sync status.
    pub fn status(&self) -> SyncStatus {
        self.status.borrow().clone()
    }

    /// Subscribes to sync status changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncStatus> {
        self.status.clone()
    }
}

/// Spawns the mirroring worker for a store.
#[derive(Debug)]
pub struct Synchronizer;

impl Synchronizer {
    /// Starts a worker task that consumes events in issuance order.
    ///
    /// The handle can be cloned freely; the worker stops once every
    /// handle is dropped.
    #[instrument(skip(store))]
    pub fn spawn<S: GameStore>(store: S) -> SyncHandle {
        info!("Starting persistence synchronizer");
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(SyncStatus::default());
        tokio::spawn(run_worker(store, event_rx, status_tx));
        SyncHandle {
            events: event_tx,
            status: status_rx,
        }
    }
}

/// Worker loop: one event fully handled before the next is taken, so
/// remote calls are issued in move order. Completion order at the store
/// is still whatever the network delivers.
async fn run_worker<S: GameStore>(
    store: S,
    mut events: mpsc::UnboundedReceiver<SyncEvent>,
    status: watch::Sender<SyncStatus>,
) {
    let mut remote_id: Option<GameId> = None;

    while let Some(event) = events.recv().await {
        match event {
            SyncEvent::SessionStarted { first_player } => {
                // A reset discards the previous record's id; it is never reused.
                remote_id = None;
                let _ = status.send(SyncStatus::default());

                match store.create_game(first_player).await {
                    Ok(id) => {
                        info!(game_id = %id, "Session mirrored remotely");
                        remote_id = Some(id.clone());
                        let _ = status.send(SyncStatus {
                            remote_id: Some(id),
                            last_error: None,
                        });
                    }
                    Err(e) => {
                        warn!(error = %e, "Remote create failed; session stays unmirrored");
                        let _ = status.send(SyncStatus {
                            remote_id: None,
                            last_error: Some(e.message.clone()),
                        });
                    }
                }
            }
            SyncEvent::MoveApplied { board, player } => {
                let Some(id) = remote_id.as_deref() else {
                    debug!("Session is unmirrored, skipping move sync");
                    continue;
                };
                if let Err(e) = store.update_game(id, &board, player).await {
                    warn!(game_id = %id, error = %e, "Remote update failed, dropping");
                    let _ = status.send(SyncStatus {
                        remote_id: remote_id.clone(),
                        last_error: Some(e.message.clone()),
                    });
                }
            }
        }
    }

    debug!("All sync handles dropped, worker exiting");
}
