//! Excuse Me library - tic-tac-toe with best-effort backend mirroring
//!
//! A single-client, two-player tic-tac-toe game whose state transitions
//! are mirrored to a remote backend on a best-effort basis, plus a
//! random-excuse fetcher and a file uploader against the same backend.
//!
//! # Architecture
//!
//! - **Game**: pure, synchronous state machine over the 3x3 board
//! - **Synchronizer**: event queue + worker that mirrors transitions
//!   remotely without ever blocking play
//! - **BackendClient**: typed client for the backend function endpoints
//! - **Server**: native stand-in for those endpoints over SQLite
//! - **TUI**: terminal presentation layer consuming a [`GameSession`]
//!
//! # Example
//!
//! ```
//! use excuseme::{Game, GameStatus, IllegalMove};
//!
//! let mut game = Game::new();
//! game.apply_move(4)?;
//! assert!(matches!(game.state().status(), GameStatus::InProgress));
//!
//! // Occupied squares are rejected without touching the state.
//! assert_eq!(game.apply_move(4), Err(IllegalMove::Occupied { index: 4 }));
//! # Ok::<(), excuseme::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod auth;
mod cli;
mod config;
mod db;
mod excuses;
mod game;
mod remote;
mod server;
mod session;
mod sync;
mod tui;

// Crate-level exports - Identity provider client
pub use auth::{AuthClient, AuthSession, AuthUser};

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ANON_KEY_VAR, BACKEND_URL_VAR, Config, ConfigError};

// Crate-level exports - Database layer
pub use db::{DbError, GamePhase, GameRepository, GameRow, MIGRATIONS, NewGameRow};

// Crate-level exports - Excuses
pub use excuses::{Language, corpus, random_excuse};

// Crate-level exports - Game types and state machine
pub use game::{
    Board, Game, GameState, GameStatus, IllegalMove, LINES, Player, Square, WinningLine,
    check_winner, is_full,
};

// Crate-level exports - Backend client and wire types
pub use remote::{
    BackendClient, CreateGameRequest, CreateGameResponse, ErrorResponse, ExcuseRequest,
    ExcuseResponse, GameRecord, RemoteError, UpdateGameRequest, UpdateGameResponse,
    UploadResponse,
};

// Crate-level exports - Server
pub use server::{ApiError, AppState, router, serve};

// Crate-level exports - Session and synchronizer
pub use session::GameSession;
pub use sync::{GameId, GameStore, SyncEvent, SyncHandle, SyncStatus, Synchronizer};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
