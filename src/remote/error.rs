//! Remote backend error type.

use derive_more::{Display, Error};

/// Backend call failure with location tracking.
///
/// Covers network, auth, and server failures alike; the synchronizer
/// treats them all the same way (log and move on).
#[derive(Debug, Clone, Display, Error)]
#[display("Remote error: {} at {}:{}", message, file, line)]
pub struct RemoteError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl RemoteError {
    /// Creates a new remote error with caller location tracking.
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

impl From<reqwest::Error> for RemoteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}
