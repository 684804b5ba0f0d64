//! Identity provider client.
//!
//! Thin client over the provider's REST auth surface. The rest of the
//! application only consumes the derived "authenticated" signal and the
//! user identity; state changes are observable through a watch channel,
//! the Rust shape of an "auth state changed" subscription.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::remote::RemoteError;

/// Authenticated user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user id.
    pub id: String,
    /// Email, when the provider exposes one.
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// The signed-in user.
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// Client for the identity provider's auth endpoints.
#[derive(Debug)]
pub struct AuthClient {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
    state: watch::Sender<Option<AuthSession>>,
}

impl AuthClient {
    /// Creates a signed-out client from the resolved configuration.
    #[instrument(skip(config), fields(backend_url = %config.backend_url()))]
    pub fn new(config: &Config) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            base_url: config.backend_url().trim_end_matches('/').to_string(),
            anon_key: config.anon_key().clone(),
            http: reqwest::Client::new(),
            state,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Returns the current session, if signed in.
    pub fn session(&self) -> Option<AuthSession> {
        self.state.borrow().clone()
    }

    /// True when a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Subscribes to auth state changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthSession>> {
        self.state.subscribe()
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on network failure or rejected
    /// credentials; the stored state is untouched in that case.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, RemoteError> {
        debug!("Signing in");
        let response = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::new(format!(
                "sign-in rejected with status {}",
                status
            )));
        }

        let token: TokenResponse = response.json().await?;
        let session = AuthSession {
            access_token: token.access_token,
            user: token.user,
        };
        info!(user_id = %session.user.id, "Signed in");
        self.state.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Re-validates the stored session against the provider.
    ///
    /// A rejected token clears the stored session (the provider is the
    /// source of truth for validity).
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] when signed out, on network failure, or
    /// when the provider rejects the token.
    #[instrument(skip(self))]
    pub async fn fetch_user(&self) -> Result<AuthUser, RemoteError> {
        let session = self
            .session()
            .ok_or_else(|| RemoteError::new("not signed in"))?;

        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Stored session rejected, clearing");
            self.state.send_replace(None);
            return Err(RemoteError::new(format!(
                "session check failed with status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }

    /// Signs out. The local session is cleared even if the provider
    /// call fails.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), RemoteError> {
        let session = self.session();
        self.state.send_replace(None);

        if let Some(session) = session {
            let response = self
                .http
                .post(self.auth_url("logout"))
                .header("apikey", &self.anon_key)
                .bearer_auth(&session.access_token)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(RemoteError::new(format!(
                    "sign-out returned status {}",
                    response.status()
                )));
            }
        }

        info!("Signed out");
        Ok(())
    }
}
