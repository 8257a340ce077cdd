//! Mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::swipe::SwipeDecoder;
use crate::types::{Direction, GameCommand};

/// Terminal columns per grid cell; mouse columns are scaled so both axes use cells.
pub const COLUMNS_PER_CELL: f32 = 2.0;

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Steering
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameCommand::SetDirection(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(GameCommand::SetDirection(Direction::Down)),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(GameCommand::SetDirection(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(GameCommand::SetDirection(Direction::Right)),

        // Lifecycle
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameCommand::TogglePause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(GameCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Feed a mouse event into the swipe decoder.
///
/// Left button press anchors, drags steer, release ends the gesture.
pub fn handle_mouse_event(decoder: &mut SwipeDecoder, event: MouseEvent) -> Option<GameCommand> {
    let x = event.column as f32 / COLUMNS_PER_CELL;
    let y = event.row as f32;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            decoder.press(x, y);
            None
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            decoder.drag(x, y).map(GameCommand::SetDirection)
        }
        MouseEventKind::Up(MouseButton::Left) => {
            decoder.release();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::SetDirection(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameCommand::SetDirection(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::SetDirection(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::SetDirection(Direction::Right))
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameCommand::SetDirection(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameCommand::SetDirection(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameCommand::SetDirection(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameCommand::SetDirection(Direction::Right))
        );
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameCommand::Reset)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_mouse_drag_steers() {
        let mut decoder = SwipeDecoder::new(3.0);
        let left = MouseButton::Left;

        let press = mouse(MouseEventKind::Down(left), 10, 10);
        assert_eq!(handle_mouse_event(&mut decoder, press), None);
        // 6 columns = 3 cells: not past the threshold yet.
        let short = mouse(MouseEventKind::Drag(left), 16, 10);
        assert_eq!(handle_mouse_event(&mut decoder, short), None);

        let right = mouse(MouseEventKind::Drag(left), 18, 10);
        assert_eq!(
            handle_mouse_event(&mut decoder, right),
            Some(GameCommand::SetDirection(Direction::Right))
        );
        let up = mouse(MouseEventKind::Drag(left), 18, 6);
        assert_eq!(
            handle_mouse_event(&mut decoder, up),
            Some(GameCommand::SetDirection(Direction::Up))
        );
        handle_mouse_event(&mut decoder, mouse(MouseEventKind::Up(left), 18, 6));
        assert!(!decoder.is_tracking());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut decoder = SwipeDecoder::new(3.0);
        handle_mouse_event(&mut decoder, mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        assert!(!decoder.is_tracking());
    }
}
