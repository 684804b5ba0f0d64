//! Command-line interface for excuseme.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::excuses::Language;

/// Excuse Me - tic-tac-toe with best-effort backend mirroring
#[derive(Parser, Debug)]
#[command(name = "excuseme")]
#[command(about = "Tic-tac-toe with best-effort backend mirroring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI client
    Play {
        /// Backend base URL (overrides the environment and config file)
        #[arg(long)]
        backend_url: Option<String>,

        /// Path to a TOML config profile
        #[arg(long)]
        config: Option<PathBuf>,

        /// Email for optional sign-in
        #[arg(long)]
        email: Option<String>,

        /// Password for optional sign-in (pairs with --email)
        #[arg(long)]
        password: Option<String>,
    },

    /// Run the backend function endpoints locally
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path to the SQLite database (created if it doesn't exist)
        #[arg(long, default_value = "excuseme.db")]
        db_path: String,

        /// Directory uploads are stored under
        #[arg(long, default_value = "storage")]
        storage_dir: PathBuf,
    },

    /// Fetch one random excuse and print it
    Excuse {
        /// Excuse language (en or es)
        #[arg(long, default_value = "en")]
        language: Language,

        /// Backend base URL (overrides the environment and config file)
        #[arg(long)]
        backend_url: Option<String>,

        /// Path to a TOML config profile
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Upload a file to the backend
    Upload {
        /// File to upload
        file: PathBuf,

        /// User id to file the upload under (ignored when signing in)
        #[arg(long, default_value = "anonymous")]
        user_id: String,

        /// Email to sign in with; the account's user id is used instead
        #[arg(long)]
        email: Option<String>,

        /// Password for sign-in (pairs with --email)
        #[arg(long)]
        password: Option<String>,

        /// Backend base URL (overrides the environment and config file)
        #[arg(long)]
        backend_url: Option<String>,

        /// Path to a TOML config profile
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
