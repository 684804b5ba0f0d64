//! Function endpoint handlers.

use std::path::Path;

use axum::Json;
use axum::extract::{Multipart, State};
use tracing::{debug, info, instrument};

use super::AppState;
use super::error::ApiError;
use crate::db::GamePhase;
use crate::excuses::{self, Language};
use crate::game::{check_winner, is_full};
use crate::remote::{
    CreateGameRequest, CreateGameResponse, ExcuseRequest, ExcuseResponse, GameRecord,
    UpdateGameRequest, UpdateGameResponse, UploadResponse,
};

/// Creates a new game row and returns its id.
#[instrument(skip(state, request), fields(player = %request.player))]
pub(super) async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let row = state.repo().create_game(request.player)?;
    Ok(Json(CreateGameResponse {
        game_id: row.id().clone(),
    }))
}

/// Stores a posted board snapshot.
///
/// Terminal status and winner are recomputed here with the same
/// evaluator the client uses, so the stored verdict can never disagree
/// with the one the player saw. Move legality is not checked; the
/// client's state machine already enforced it.
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
pub(super) async fn update_game(
    State(state): State<AppState>,
    Json(request): Json<UpdateGameRequest>,
) -> Result<Json<UpdateGameResponse>, ApiError> {
    let win = check_winner(&request.board);
    let phase = match &win {
        Some(_) => GamePhase::Won,
        None if is_full(&request.board) => GamePhase::Draw,
        None => GamePhase::Playing,
    };
    let winner = win.map(|w| *w.winner());
    let next_player = request.current_player.opponent();

    let row = state.repo().update_game(
        &request.game_id,
        &request.board,
        next_player,
        phase,
        winner,
    )?;

    let game = GameRecord {
        id: row.id().clone(),
        board: row.parse_board()?,
        current_player: row.parse_current_player()?,
        status: row.status().clone(),
        winner: row.parse_winner()?,
    };
    Ok(Json(UpdateGameResponse { game }))
}

/// Returns a random excuse in the requested language.
///
/// Unknown or missing language codes fall back to English.
#[instrument(skip(request))]
pub(super) async fn excuse_generator(
    Json(request): Json<ExcuseRequest>,
) -> Json<ExcuseResponse> {
    let language = request
        .language
        .as_deref()
        .and_then(|s| s.parse::<Language>().ok())
        .unwrap_or_default();
    let excuse = excuses::random_excuse(language).to_string();
    info!(language = %language, excuse = %excuse, "Excuse generated");
    Json(ExcuseResponse { excuse })
}

/// Accepts a multipart upload and stores the blob on disk.
#[instrument(skip(state, multipart))]
pub(super) async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut user_id: Option<String> = None;
    let mut file: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("user_id") => user_id = Some(field.text().await?),
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                file = Some((file_name, field.bytes().await?));
            }
            other => debug!(name = ?other, "Ignoring unknown field"),
        }
    }

    let user_id = user_id.ok_or_else(|| ApiError::new("missing 'user_id' field"))?;
    let (name, data) = file.ok_or_else(|| ApiError::new("missing 'file' field"))?;

    if user_id.is_empty() || user_id.contains(['/', '\\']) || user_id.contains("..") {
        return Err(ApiError::new(format!("invalid user id: '{}'", user_id)));
    }
    // Client-supplied names may carry path components; keep only the leaf.
    let name = Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    let dir = state.storage_root().join(&user_id);
    tokio::fs::create_dir_all(&dir).await?;
    let dest = dir.join(&name);
    tokio::fs::write(&dest, &data).await?;

    info!(path = %dest.display(), bytes = data.len(), "File stored");
    Ok(Json(UploadResponse {
        path: format!("{}/{}", user_id, name),
    }))
}
