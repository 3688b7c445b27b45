//! Keyboard mapping.
//!
//! Translates crossterm key events into [`GameInput`]s. Only presses
//! count, so holding a key does not flap repeatedly.

use crate::game::GameInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game input, ignoring releases and auto-repeat.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(GameInput::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameInput::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Map any terminal event; only key events produce input.
pub fn map_event(event: Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}
