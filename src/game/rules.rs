//! Win and draw evaluation.
//!
//! Pure functions over a board snapshot. The server's update endpoint
//! evaluates posted boards with these same functions, so both sides
//! always agree on terminal status.

use super::types::{Board, Player, Square};
use derive_getters::Getters;
use tracing::instrument;

/// The eight winning triples, in scan priority order: rows top to
/// bottom, columns left to right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed winning triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WinningLine {
    winner: Player,
    line: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first triple (in [`LINES`] order) whose three squares
/// hold the same player, so ties between simultaneous triples resolve
/// to the fixed scan order.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(player)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(player))
            && board.get(c) == Some(Square::Occupied(player))
        {
            return Some(WinningLine {
                winner: player,
                line,
            });
        }
    }

    None
}

/// Checks if the board is full (all squares occupied).
///
/// Independent of the winner check: a full board with a winning line
/// is a win, never a draw, so callers must check the winner first.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let marks: Vec<_> = line.iter().map(|&pos| (pos, player)).collect();
                let board = board_with(&marks);
                let win = check_winner(&board).expect("line should win");
                assert_eq!(*win.winner(), player);
                assert_eq!(*win.line(), line);
            }
        }
    }

    #[test]
    fn test_tie_break_prefers_scan_order() {
        // X holds both the top row and the left column; rows scan first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        let win = check_winner(&board).expect("should win");
        assert_eq!(*win.line(), [0, 1, 2]);
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_with(&[(4, Player::X)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner_is_a_win() {
        // Full board where X holds the top row: winner check takes
        // priority over the draw check.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::O),
            (4, Player::O),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert!(is_full(&board));
        let win = check_winner(&board).expect("should win");
        assert_eq!(*win.winner(), Player::X);
        assert_eq!(*win.line(), [0, 1, 2]);
    }
}
