//! Tests for database repository operations.

use tempfile::NamedTempFile;

use excuseme::{Board, GamePhase, GameRepository, Player};

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

/// Creates a temporary database file with schema applied, returns the
/// file handle (must stay in scope to keep the file alive) and a ready
/// repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    (db_file, repo)
}

#[test]
fn test_migrations_are_idempotent() {
    let (_db, repo) = setup_test_db();
    repo.run_migrations().expect("Second run should be a no-op");
}

#[test]
fn test_create_game() {
    let (_db, repo) = setup_test_db();
    let row = repo.create_game(Player::X).expect("Create failed");

    assert!(!row.id().is_empty());
    assert_eq!(row.current_player(), "X");
    assert_eq!(row.status(), "playing");
    assert!(row.winner().is_none());
    assert_eq!(row.parse_board().expect("Board parse failed"), Board::new());
    assert_eq!(row.parse_phase().expect("Phase parse failed"), GamePhase::Playing);
}

#[test]
fn test_create_game_assigns_unique_ids() {
    let (_db, repo) = setup_test_db();
    let a = repo.create_game(Player::X).expect("Create failed");
    let b = repo.create_game(Player::O).expect("Create failed");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_get_game_found() {
    let (_db, repo) = setup_test_db();
    let created = repo.create_game(Player::X).expect("Create failed");

    let found = repo.get_game(created.id()).expect("Query failed");
    assert_eq!(found.expect("Row should exist").id(), created.id());
}

#[test]
fn test_get_game_not_found() {
    let (_db, repo) = setup_test_db();
    let found = repo.get_game("no-such-id").expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_update_game_persists_snapshot() {
    let (_db, repo) = setup_test_db();
    let created = repo.create_game(Player::X).expect("Create failed");

    let board = Board::from([X, E, E, E, O, E, E, E, E]);
    let updated = repo
        .update_game(created.id(), &board, Player::X, GamePhase::Playing, None)
        .expect("Update failed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.current_player(), "X");
    assert_eq!(updated.status(), "playing");
    assert!(updated.winner().is_none());
    assert_eq!(updated.parse_board().expect("Board parse failed"), board);
    assert_eq!(
        updated.parse_current_player().expect("Player parse failed"),
        Player::X
    );
}

#[test]
fn test_update_game_records_winner() {
    let (_db, repo) = setup_test_db();
    let created = repo.create_game(Player::X).expect("Create failed");

    let board = Board::from([X, X, X, O, O, E, E, E, E]);
    let updated = repo
        .update_game(
            created.id(),
            &board,
            Player::O,
            GamePhase::Won,
            Some(Player::X),
        )
        .expect("Update failed");

    assert_eq!(updated.status(), "won");
    assert_eq!(updated.parse_phase().expect("Phase parse failed"), GamePhase::Won);
    assert_eq!(
        updated.parse_winner().expect("Winner parse failed"),
        Some(Player::X)
    );
}

#[test]
fn test_update_missing_game_fails() {
    let (_db, repo) = setup_test_db();
    let board = Board::new();
    let result = repo.update_game("no-such-id", &board, Player::X, GamePhase::Playing, None);
    assert!(result.is_err(), "Updating a missing row should fail");
}
