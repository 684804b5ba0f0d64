//! Backend client: remote persistence mirror, excuses, uploads.

mod client;
mod error;
mod types;

pub use client::BackendClient;
pub use error::RemoteError;
pub use types::{
    CreateGameRequest, CreateGameResponse, ErrorResponse, ExcuseRequest, ExcuseResponse,
    GameRecord, UpdateGameRequest, UpdateGameResponse, UploadResponse,
};
