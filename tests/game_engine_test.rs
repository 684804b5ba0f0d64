//! Tests for the game state machine.

use excuseme::{Game, GameState, GameStatus, IllegalMove, Player};

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

fn play_all(game: &mut Game, moves: &[usize]) {
    for &index in moves {
        game.apply_move(index).expect("legal move");
    }
}

#[test]
fn test_fresh_game_is_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.state(), &GameState::new());
    assert_eq!(game.state().current_player(), Player::X);
    assert_eq!(game.state().status(), &GameStatus::InProgress);
    assert_eq!(game.state().board().cells(), [E; 9]);
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    game.apply_move(4).unwrap();
    assert_eq!(game.state().current_player(), Player::O);
    game.apply_move(0).unwrap();
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = Game::new();
    game.apply_move(4).unwrap();
    let before = game.state().clone();

    assert_eq!(
        game.apply_move(4),
        Err(IllegalMove::Occupied { index: 4 })
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_out_of_range_rejected_without_mutation() {
    let mut game = Game::new();
    let before = game.state().clone();

    assert_eq!(
        game.apply_move(9),
        Err(IllegalMove::OutOfBounds { index: 9 })
    );
    assert_eq!(
        game.apply_move(42),
        Err(IllegalMove::OutOfBounds { index: 42 })
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_x_wins_top_row() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        game.state().status(),
        &GameStatus::Won {
            winner: Player::X,
            line: [0, 1, 2],
        }
    );
    assert_eq!(game.state().board().cells(), [X, X, X, O, O, E, E, E, E]);
    // The turn does not advance once the game is decided.
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_terminal_game_rejects_further_moves() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.state().clone();

    assert_eq!(game.apply_move(8), Err(IllegalMove::GameOver));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_nine_moves_without_a_line_is_a_draw() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.state().status(), &GameStatus::Draw);
    assert!(game.state().status().is_terminal());
    assert!(game.state().board().cells().iter().all(|c| c.is_some()));
}

#[test]
fn test_reset_returns_fresh_state_from_any_status() {
    // Mid-game.
    let mut game = Game::new();
    play_all(&mut game, &[4, 0]);
    game.reset();
    assert_eq!(game.state(), &GameState::new());

    // Won.
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();
    assert_eq!(game.state(), &GameState::new());

    // Drawn.
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.reset();
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn test_rejection_reasons_render_for_display() {
    assert_eq!(IllegalMove::GameOver.to_string(), "game is already over");
    assert_eq!(
        IllegalMove::Occupied { index: 4 }.to_string(),
        "position 4 is already occupied"
    );
    assert_eq!(
        IllegalMove::OutOfBounds { index: 11 }.to_string(),
        "position 11 is out of bounds (must be 0-8)"
    );
}
