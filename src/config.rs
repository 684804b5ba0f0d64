//! Application configuration.
//!
//! The backend URL and anon key come from the environment (loaded from
//! `.env` by the binary) or from a TOML profile. A missing key is a
//! warning, not an error: the game is fully playable offline, it just
//! stays unmirrored.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "EXCUSEME_BACKEND_URL";
/// Environment variable naming the backend anon key.
pub const ANON_KEY_VAR: &str = "EXCUSEME_ANON_KEY";

/// Resolved client configuration.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend (functions and auth live under it).
    #[serde(default)]
    backend_url: String,
    /// Anon key sent as a bearer token on function calls.
    #[serde(default)]
    anon_key: String,
}

impl Config {
    /// Creates a configuration from explicit values.
    pub fn new(backend_url: String, anon_key: String) -> Self {
        Self {
            backend_url,
            anon_key,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// Missing variables resolve to empty strings with a warning so
    /// local play still works.
    #[instrument]
    pub fn from_env() -> Self {
        let config = Self {
            backend_url: std::env::var(BACKEND_URL_VAR).unwrap_or_default(),
            anon_key: std::env::var(ANON_KEY_VAR).unwrap_or_default(),
        };
        config.warn_if_incomplete();
        config
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        config.warn_if_incomplete();
        Ok(config)
    }

    /// Logs a warning when the backend settings are incomplete.
    pub fn warn_if_incomplete(&self) {
        if self.backend_url.is_empty() || self.anon_key.is_empty() {
            warn!(
                "Backend is not configured; remote mirroring, excuses, and uploads \
                 will fail. Set {} and {} (e.g. in a .env file).",
                BACKEND_URL_VAR, ANON_KEY_VAR
            );
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
