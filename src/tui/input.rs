//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor (0-8, row-major) based on arrow keys.
///
/// Movement stops at the grid edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(6, KeyCode::Left), 6);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(4, KeyCode::Enter), 4);
        assert_eq!(move_cursor(4, KeyCode::Char('x')), 4);
    }
}
