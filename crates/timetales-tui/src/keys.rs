//! Keyboard input handling for the date explorer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timetales_types::DaySelection;

use crate::app::DateExplorer;

/// What the caller should do after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing further.
    None,
    /// The selection changed (or a refresh was requested); fetch it.
    Refetch,
}

/// Apply one key event to the application state.
///
/// Date changes return [`KeyAction::Refetch`] so the caller issues
/// exactly one fetch per user action.
pub fn handle_key(app: &mut DateExplorer, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            KeyAction::None
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.selection = app.selection.next_day();
            KeyAction::Refetch
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.selection = app.selection.previous_day();
            KeyAction::Refetch
        }
        KeyCode::Up => {
            app.selection = app.selection.next_month();
            KeyAction::Refetch
        }
        KeyCode::Down => {
            app.selection = app.selection.previous_month();
            KeyAction::Refetch
        }
        KeyCode::Char('t') => {
            app.selection = DaySelection::today();
            KeyAction::Refetch
        }
        KeyCode::Char('r') => KeyAction::Refetch,
        KeyCode::Char('j') => {
            app.scroll_down(1);
            KeyAction::None
        }
        KeyCode::Char('k') => {
            app.scroll_up(1);
            KeyAction::None
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            KeyAction::None
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn right_advances_day_and_requests_fetch() {
        let mut app = DateExplorer::new();
        app.selection = DaySelection::new(12, 24);

        let action = handle_key(&mut app, key(KeyCode::Right));

        assert_eq!(action, KeyAction::Refetch);
        assert_eq!(app.selection.day(), 25);
    }

    #[test]
    fn up_advances_month() {
        let mut app = DateExplorer::new();
        app.selection = DaySelection::new(3, 14);

        let action = handle_key(&mut app, key(KeyCode::Up));

        assert_eq!(action, KeyAction::Refetch);
        assert_eq!(app.selection.month(), 4);
    }

    #[test]
    fn today_key_resets_selection_and_requests_fetch() {
        let mut app = DateExplorer::new();
        app.selection = DaySelection::new(1, 1);

        let action = handle_key(&mut app, key(KeyCode::Char('t')));

        assert_eq!(action, KeyAction::Refetch);
        assert_eq!(app.selection, DaySelection::today());
    }

    #[test]
    fn refresh_key_requests_fetch_without_moving() {
        let mut app = DateExplorer::new();
        app.selection = DaySelection::new(6, 6);

        let action = handle_key(&mut app, key(KeyCode::Char('r')));

        assert_eq!(action, KeyAction::Refetch);
        assert_eq!(app.selection, DaySelection::new(6, 6));
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = DateExplorer::new();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = DateExplorer::new();
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.running);

        let mut app = DateExplorer::new();
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, ctrl_c);
        assert!(!app.running);
    }

    #[test]
    fn scroll_keys_do_not_request_fetch() {
        let mut app = DateExplorer::new();

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('j'))), KeyAction::None);
        assert_eq!(app.scroll, 1);
        assert_eq!(handle_key(&mut app, key(KeyCode::PageDown)), KeyAction::None);
        assert_eq!(app.scroll, 11);
    }
}
