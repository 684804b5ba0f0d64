//! Native implementation of the backend function endpoints.
//!
//! Stand-in for the hosted functions: create-game, update-game,
//! excuse-generator, and upload-file, backed by a SQLite games table
//! and a disk storage root. The client works against either this
//! server or the hosted backend; the wire types are shared.

mod error;
mod handlers;

use std::path::PathBuf;

use axum::Router;
use axum::routing::post;
use derive_getters::Getters;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::db::GameRepository;

pub use error::ApiError;

/// Shared state for the function handlers.
#[derive(Debug, Clone, Getters)]
pub struct AppState {
    /// Game row repository.
    repo: GameRepository,
    /// Directory uploads are stored under.
    storage_root: PathBuf,
}

impl AppState {
    /// Creates the server state.
    pub fn new(repo: GameRepository, storage_root: PathBuf) -> Self {
        Self { repo, storage_root }
    }
}

/// Builds the function router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/functions/v1/create-game", post(handlers::create_game))
        .route("/functions/v1/update-game", post(handlers::update_game))
        .route(
            "/functions/v1/excuse-generator",
            post(handlers::excuse_generator),
        )
        .route("/functions/v1/upload-file", post(handlers::upload_file))
        .with_state(state)
}

/// Binds and serves the function endpoints until shutdown.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server
/// fails while running.
#[instrument(skip(state))]
pub async fn serve(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = TcpListener::bind((host, port)).await?;
    info!("Server ready at http://{}:{}/", host, port);
    axum::serve(listener, app).await?;
    Ok(())
}
