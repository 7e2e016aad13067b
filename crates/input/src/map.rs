//! Key mapping from terminal events to game moves.

use crate::types::Move;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game move.
///
/// Close keys map to [`Move::Closed`]; unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Move> {
    if is_close(key) {
        return Some(Move::Closed);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Move::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Move::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Move::MoveDown),

        // Rotation: a/s turn left, w/d turn right
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Move::RotateRight),
        KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Move::RotateLeft),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(Move::Pause),

        _ => None,
    }
}

/// Check if key should close the session.
pub fn is_close(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Move::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Move::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Move::MoveDown));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Move::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('l'))), Some(Move::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Move::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Move::RotateRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), Some(Move::RotateRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), Some(Move::RotateLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('A'))), Some(Move::RotateLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Move::RotateLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(Move::RotateRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(Move::RotateRight));
    }

    #[test]
    fn test_pause_and_unbound_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Move::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_close_keys() {
        assert!(is_close(KeyEvent::from(KeyCode::Char('q'))));
        assert!(is_close(KeyEvent::from(KeyCode::Esc)));
        assert!(is_close(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_close(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('Q'))), Some(Move::Closed));
    }
}
