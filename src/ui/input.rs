//! Keyboard input handling for the TUI.
//!
//! This module translates keyboard events into the intents the
//! application core understands: cursor movement, ship selection and
//! page navigation.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.state = AppState::Normal;
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_under_cursor(),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => app.previous_page(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }

    false
}
