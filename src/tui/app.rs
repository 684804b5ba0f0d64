//! Application state and logic for the terminal client.

use tokio::sync::watch;
use tracing::debug;

use crate::excuses::Language;
use crate::game::{GameState, GameStatus, Player};
use crate::remote::RemoteError;
use crate::session::GameSession;
use crate::sync::SyncStatus;

/// Result of a background task, delivered to the UI loop.
#[derive(Debug)]
pub enum UiMessage {
    /// An excuse fetch finished.
    ExcuseFetched {
        /// Language that was requested.
        language: Language,
        /// The fetched excuse, or the failure.
        result: Result<String, RemoteError>,
    },
}

/// Main application state.
pub struct App {
    session: GameSession,
    sync_status: watch::Receiver<SyncStatus>,
    cursor: usize,
    status_message: String,
    excuse: Option<(Language, String)>,
    excuse_pending: bool,
    user_email: Option<String>,
    starting: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application over a session.
    pub fn new(session: GameSession, user_email: Option<String>) -> Self {
        let sync_status = session.sync().subscribe();
        Self {
            session,
            sync_status,
            cursor: 4,
            status_message: format!("Player {}'s turn.", Player::X),
            excuse: None,
            excuse_pending: false,
            user_email,
            starting: false,
            should_quit: false,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Returns the cursor position (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns the last fetched excuse, if any.
    pub fn excuse(&self) -> Option<&(Language, String)> {
        self.excuse.as_ref()
    }

    /// True while an excuse fetch is in flight.
    pub fn excuse_pending(&self) -> bool {
        self.excuse_pending
    }

    /// Returns the signed-in user's email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Returns a snapshot of the synchronizer status.
    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status.borrow().clone()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves the cursor.
    pub fn move_cursor(&mut self, key: crossterm::event::KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Clears transient flags once the synchronizer has answered.
    pub fn tick(&mut self) {
        if self.starting {
            let status = self.sync_status.borrow();
            if status.remote_id().is_some() || status.last_error().is_some() {
                self.starting = false;
            }
        }
    }

    /// Plays at the cursor position.
    pub fn place_at_cursor(&mut self) {
        self.place(self.cursor);
    }

    /// Plays at the given position, updating the status line either way.
    pub fn place(&mut self, index: usize) {
        match self.session.play(index) {
            Ok(status) => {
                self.status_message = describe(&status, self.session.state().current_player());
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                self.status_message = format!("Move rejected: {}.", reason);
            }
        }
    }

    /// Starts a new game with a fresh remote record.
    ///
    /// Repeated intents while the previous create is still pending are
    /// ignored.
    pub fn new_game(&mut self) {
        if self.starting {
            self.status_message = "Already starting a new game...".to_string();
            return;
        }
        self.session.start();
        self.starting = true;
        self.status_message = format!("New game. Player {}'s turn.", Player::X);
    }

    /// Resets the board locally without touching the remote record.
    pub fn reset(&mut self) {
        self.session.reset();
        self.status_message = format!("Board cleared. Player {}'s turn.", Player::X);
    }

    /// Marks an excuse fetch as started. Returns false if one is
    /// already in flight.
    pub fn begin_excuse(&mut self) -> bool {
        if self.excuse_pending {
            return false;
        }
        self.excuse_pending = true;
        true
    }

    /// Applies a background task result.
    pub fn handle_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::ExcuseFetched { language, result } => {
                self.excuse_pending = false;
                match result {
                    Ok(excuse) => self.excuse = Some((language, excuse)),
                    Err(e) => {
                        self.status_message = format!("Failed to fetch excuse: {}.", e.message);
                    }
                }
            }
        }
    }
}

fn describe(status: &GameStatus, next_player: Player) -> String {
    match status {
        GameStatus::InProgress => format!("Player {}'s turn.", next_player),
        GameStatus::Won { winner, .. } => {
            format!("Player {} wins! Press 'n' for a new game.", winner)
        }
        GameStatus::Draw => "It's a draw! Press 'n' for a new game.".to_string(),
    }
}
