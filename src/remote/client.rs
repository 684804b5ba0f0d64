//! Typed HTTP client for the backend function endpoints.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::error::RemoteError;
use super::types::{
    CreateGameRequest, CreateGameResponse, ErrorResponse, ExcuseRequest, ExcuseResponse,
    GameRecord, UpdateGameRequest, UpdateGameResponse, UploadResponse,
};
use crate::config::Config;
use crate::excuses::Language;
use crate::game::{Board, Player};
use crate::sync::{GameId, GameStore};

/// HTTP client for the backend's function endpoints.
///
/// Carries the anon key as a bearer token on every call.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Creates a client from the resolved configuration.
    #[instrument(skip(config), fields(backend_url = %config.backend_url()))]
    pub fn new(config: &Config) -> Self {
        info!("Creating backend client");
        Self {
            base_url: config.backend_url().trim_end_matches('/').to_string(),
            anon_key: config.anon_key().clone(),
            http: reqwest::Client::new(),
        }
    }

    fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.base_url, name)
    }

    /// POSTs a JSON body to a function endpoint and decodes the reply.
    async fn post_function<B, T>(&self, name: &str, body: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.function_url(name))
            .bearer_auth(&self.anon_key)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decodes a success body, or the `{ "error": ... }` envelope.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let message = match response.json::<ErrorResponse>().await {
            Ok(envelope) => envelope.error,
            Err(_) => format!("backend returned status {}", status),
        };
        Err(RemoteError::new(message))
    }

    /// Fetches a random excuse in the given language.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on network or server failure.
    #[instrument(skip(self))]
    pub async fn fetch_excuse(&self, language: Language) -> Result<String, RemoteError> {
        debug!("Requesting excuse");
        let request = ExcuseRequest {
            language: Some(language.to_string()),
        };
        let response: ExcuseResponse = self.post_function("excuse-generator", &request).await?;
        Ok(response.excuse)
    }

    /// Uploads a local file for the given user, returning its storage path.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the file cannot be read or the upload
    /// is rejected.
    #[instrument(skip(self, path), fields(user_id = %user_id))]
    pub async fn upload_file(
        &self,
        user_id: &str,
        path: impl AsRef<Path>,
    ) -> Result<String, RemoteError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading file for upload");
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| RemoteError::new(format!("Failed to read '{}': {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .text("user_id", user_id.to_string())
            .part("file", part);

        let response = self
            .http
            .post(self.function_url("upload-file"))
            .bearer_auth(&self.anon_key)
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::decode(response).await?;
        info!(path = %uploaded.path, "File uploaded");
        Ok(uploaded.path)
    }
}

#[async_trait]
impl GameStore for BackendClient {
    #[instrument(skip(self))]
    async fn create_game(&self, first_player: Player) -> Result<GameId, RemoteError> {
        info!(player = %first_player, "Creating remote game");
        let request = CreateGameRequest {
            player: first_player,
        };
        let response: CreateGameResponse = self.post_function("create-game", &request).await?;
        info!(game_id = %response.game_id, "Remote game created");
        Ok(response.game_id)
    }

    #[instrument(skip(self, board), fields(game_id = %game_id))]
    async fn update_game(
        &self,
        game_id: &str,
        board: &Board,
        player: Player,
    ) -> Result<GameRecord, RemoteError> {
        debug!("Mirroring move to backend");
        let request = UpdateGameRequest {
            game_id: game_id.to_string(),
            board: board.clone(),
            current_player: player,
        };
        let response: UpdateGameResponse = self.post_function("update-game", &request).await?;
        Ok(response.game)
    }
}
