//! Database repository for mirrored games.

use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::db::{DbError, GamePhase, GameRow, MIGRATIONS, NewGameRow, schema};
use crate::game::{Board, Player};

/// Repository for game row operations.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Creates a new game row with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self), fields(first_player = %first_player))]
    pub fn create_game(&self, first_player: Player) -> Result<GameRow, DbError> {
        debug!("Creating game row");
        let mut conn = self.connection()?;

        let row = NewGameRow::new(
            Uuid::new_v4().to_string(),
            serde_json::to_string(&Board::new())?,
            first_player.to_string(),
            GamePhase::Playing.to_db_string().to_string(),
        );

        let game = diesel::insert_into(schema::games::table)
            .values(&row)
            .returning(GameRow::as_returning())
            .get_result(&mut conn)?;

        info!(game_id = %game.id(), "Game row created");
        Ok(game)
    }

    /// Overwrites a game row with a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the row does not exist or a database
    /// error occurs.
    #[instrument(skip(self, board), fields(game_id = %id, status = phase.to_db_string()))]
    pub fn update_game(
        &self,
        id: &str,
        board: &Board,
        next_player: Player,
        phase: GamePhase,
        winner: Option<Player>,
    ) -> Result<GameRow, DbError> {
        debug!("Updating game row");
        let mut conn = self.connection()?;

        let game = diesel::update(schema::games::table.find(id))
            .set((
                schema::games::board.eq(serde_json::to_string(board)?),
                schema::games::current_player.eq(next_player.to_string()),
                schema::games::status.eq(phase.to_db_string()),
                schema::games::winner.eq(winner.map(|p| p.to_string())),
                schema::games::updated_at.eq(diesel::dsl::now),
            ))
            .returning(GameRow::as_returning())
            .get_result(&mut conn)?;

        info!(game_id = %game.id(), status = %game.status(), "Game row updated");
        Ok(game)
    }

    /// Gets a game row by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Result<Option<GameRow>, DbError> {
        debug!(game_id = %id, "Looking up game row");
        let mut conn = self.connection()?;

        let game = schema::games::table
            .find(id)
            .first::<GameRow>(&mut conn)
            .optional()?;

        Ok(game)
    }
}
