//! Wire types for the backend function endpoints.
//!
//! Shared between the client and the `serve` implementation so the two
//! sides cannot drift apart. Function bodies use camelCase keys; game
//! rows come back in the store's snake_case column names.

use crate::game::{Board, Player};
use serde::{Deserialize, Serialize};

/// Body for the create-game function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Symbol of the player who moves first.
    pub player: Player,
}

/// Response from the create-game function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    /// Identifier of the newly created game row.
    pub game_id: String,
}

/// Body for the update-game function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    /// Identifier returned by create-game.
    pub game_id: String,
    /// Post-move board snapshot.
    pub board: Board,
    /// The player who made the move (pre-advance).
    pub current_player: Player,
}

/// Response from the update-game function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGameResponse {
    /// The updated game row.
    pub game: GameRecord,
}

/// A mirrored game row, as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Row identifier.
    pub id: String,
    /// Stored board snapshot.
    pub board: Board,
    /// Player whose turn the store believes it is.
    pub current_player: Player,
    /// Stored status label: `playing`, `won`, or `draw`.
    pub status: String,
    /// Stored winner, if any.
    pub winner: Option<Player>,
}

/// Body for the excuse-generator function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcuseRequest {
    /// Requested language code; unknown or missing falls back to English.
    pub language: Option<String>,
}

/// Response from the excuse-generator function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcuseResponse {
    /// The excuse text.
    pub excuse: String,
}

/// Response from the upload-file function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Storage path of the uploaded blob.
    pub path: String,
}

/// Error envelope the backend functions return on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}
