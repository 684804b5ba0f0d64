//! Database persistence layer for mirrored game rows.

mod error;
mod models;
mod repository;
mod schema;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub use error::DbError;
pub use models::{GamePhase, GameRow, NewGameRow};
pub use repository::GameRepository;

/// Embedded schema migrations, applied at server startup and in tests.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
