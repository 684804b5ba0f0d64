//! Database models for mirrored game rows.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use crate::db::{DbError, schema};
use crate::game::{Board, GameStatus, Player};

/// Stored status label for a game row.
///
/// The row schema is the remote mirror's: id, board, current_player,
/// status, winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Game is ongoing.
    Playing,
    /// Game ended in a win.
    Won,
    /// Game ended in a draw.
    Draw,
}

impl GamePhase {
    /// Converts the phase to the string stored in the database.
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Draw => "draw",
        }
    }

    /// Parses the phase from the string stored in the database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the string is not a valid phase value.
    #[instrument(skip(s), fields(s = %s))]
    pub fn from_db_string(s: &str) -> Result<Self, DbError> {
        match s {
            "playing" => Ok(Self::Playing),
            "won" => Ok(Self::Won),
            "draw" => Ok(Self::Draw),
            _ => Err(DbError::new(format!("Invalid status: '{}'", s))),
        }
    }
}

impl From<&GameStatus> for GamePhase {
    fn from(status: &GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self::Playing,
            GameStatus::Won { .. } => Self::Won,
            GameStatus::Draw => Self::Draw,
        }
    }
}

/// Game row database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRow {
    id: String,
    board: String,
    current_player: String,
    status: String,
    winner: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl GameRow {
    /// Parses the stored board JSON.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn parse_board(&self) -> Result<Board, DbError> {
        Ok(serde_json::from_str(&self.board)?)
    }

    /// Parses the stored current player symbol.
    #[instrument(skip(self), fields(id = %self.id, current_player = %self.current_player))]
    pub fn parse_current_player(&self) -> Result<Player, DbError> {
        self.current_player
            .parse()
            .map_err(|_| DbError::new(format!("Invalid player: '{}'", self.current_player)))
    }

    /// Parses the stored winner symbol, if any.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn parse_winner(&self) -> Result<Option<Player>, DbError> {
        match self.winner.as_deref() {
            None => Ok(None),
            Some(s) => s
                .parse()
                .map(Some)
                .map_err(|_| DbError::new(format!("Invalid winner: '{}'", s))),
        }
    }

    /// Parses the stored status label into a [`GamePhase`].
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn parse_phase(&self) -> Result<GamePhase, DbError> {
        GamePhase::from_db_string(self.status())
    }
}

/// Insertable game row for newly created games.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRow {
    id: String,
    board: String,
    current_player: String,
    status: String,
}
