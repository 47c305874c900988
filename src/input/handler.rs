use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Queue a direction change
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
    /// Unrecognized keys are silently ignored
    Ignored,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
