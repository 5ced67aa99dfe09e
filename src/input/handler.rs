use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Difficulty, Direction, Intent};

/// Translates terminal key presses into player intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Intent {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Intent::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Intent::Move(Direction::Up),
            KeyCode::Down => Intent::Move(Direction::Down),
            KeyCode::Left => Intent::Move(Direction::Left),
            KeyCode::Right => Intent::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Intent::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Intent::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Intent::Move(Direction::Right),

            // Difficulty menu
            KeyCode::Char(c @ '1'..='3') => c
                .to_digit(10)
                .and_then(|digit| Difficulty::from_choice(digit as u8))
                .map_or(Intent::AnyKey, Intent::SelectDifficulty),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => Intent::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,

            _ => Intent::AnyKey,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            Intent::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            Intent::Move(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            Intent::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            Intent::Move(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            Intent::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            Intent::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            Intent::Move(Direction::Down)
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            Intent::Move(Direction::Right)
        );
    }

    #[test]
    fn test_difficulty_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('1'))),
            Intent::SelectDifficulty(Difficulty::Easy)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('2'))),
            Intent::SelectDifficulty(Difficulty::Normal)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('3'))),
            Intent::SelectDifficulty(Difficulty::Hard)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('4'))),
            Intent::AnyKey
        );
    }

    #[test]
    fn test_pause_key() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('p'))),
            Intent::TogglePause
        );
        let p_upper = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(p_upper), Intent::TogglePause);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            Intent::Quit
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), Intent::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Intent::Quit);
    }

    #[test]
    fn test_unknown_key_is_any_key() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            Intent::AnyKey
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Enter)), Intent::AnyKey);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            Intent::AnyKey
        );
    }
}
