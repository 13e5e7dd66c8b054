//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyModifiers};

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePanel,
    ScrollUp,
    ScrollDown,
    Refresh,
}

/// Map a key event to an action
///
/// Returns None for keys the panel doesn't use.
pub fn map_key(key_code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode swallows SIGINT, so Ctrl+C has to be handled here
        return match key_code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('h') | KeyCode::Char(' ') => Some(Action::TogglePanel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Char('r') => Some(Action::Refresh),
        _ => None,
    }
}
