//! Excuse Me - unified CLI.
//!
//! `play` runs the terminal client; `serve` runs a local stand-in for
//! the backend functions; `excuse` and `upload` are one-shot utilities.

#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use excuseme::{
    AppState, AuthClient, AuthSession, BackendClient, Cli, Command, Config, GameRepository,
    Language, run_tui, serve,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            backend_url,
            config,
            email,
            password,
        } => run_play(backend_url, config, email, password).await,
        Command::Serve {
            host,
            port,
            db_path,
            storage_dir,
        } => run_serve(host, port, db_path, storage_dir).await,
        Command::Excuse {
            language,
            backend_url,
            config,
        } => run_excuse(language, backend_url, config).await,
        Command::Upload {
            file,
            user_id,
            email,
            password,
            backend_url,
            config,
        } => run_upload(file, user_id, email, password, backend_url, config).await,
    }
}

/// Resolves configuration from flags, a profile file, or the environment.
fn resolve_config(backend_url: Option<String>, config_path: Option<PathBuf>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };
    Ok(match backend_url {
        Some(url) => Config::new(url, config.anon_key().clone()),
        None => config,
    })
}

/// Signs in when credentials were supplied; play continues without a
/// session if sign-in fails.
async fn try_sign_in(
    config: &Config,
    email: Option<String>,
    password: Option<String>,
) -> Option<AuthSession> {
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) => (e, p),
        (None, None) => return None,
        _ => {
            eprintln!("Both --email and --password are required to sign in.");
            return None;
        }
    };

    let auth = AuthClient::new(config);
    match auth.sign_in(&email, &password).await {
        Ok(session) => Some(session),
        Err(e) => {
            eprintln!("Sign-in failed: {}", e.message);
            None
        }
    }
}

/// Run the terminal UI client
async fn run_play(
    backend_url: Option<String>,
    config_path: Option<PathBuf>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let config = resolve_config(backend_url, config_path)?;
    let session = try_sign_in(&config, email, password).await;
    run_tui(config, session).await
}

/// Run the backend function endpoints locally
async fn run_serve(host: String, port: u16, db_path: String, storage_dir: PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(db_path = %db_path, storage = %storage_dir.display(), "Starting Excuse Me backend");

    let repo = GameRepository::new(db_path)?;
    repo.run_migrations()?;
    tokio::fs::create_dir_all(&storage_dir).await?;

    let state = AppState::new(repo, storage_dir);
    serve(&host, port, state).await
}

/// Fetch one random excuse and print it
async fn run_excuse(
    language: Language,
    backend_url: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = resolve_config(backend_url, config_path)?;
    let client = BackendClient::new(&config);
    let excuse = client.fetch_excuse(language).await?;
    println!("{}", excuse);
    Ok(())
}

/// Upload a file to the backend
async fn run_upload(
    file: PathBuf,
    user_id: String,
    email: Option<String>,
    password: Option<String>,
    backend_url: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = resolve_config(backend_url, config_path)?;

    let user_id = match try_sign_in(&config, email, password).await {
        Some(session) => session.user.id,
        None => {
            if user_id == "anonymous" {
                warn!("Uploading without a signed-in user");
            }
            user_id
        }
    };

    let client = BackendClient::new(&config);
    let path = client.upload_file(&user_id, &file).await?;
    println!("Uploaded to {}", path);
    Ok(())
}
