//! Translate crossterm key events into session actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Action;

/// Map a key press to an action; `None` for keys the picker ignores
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Enter, _) => Action::Commit,
        (KeyCode::Backspace | KeyCode::Delete, _) => Action::Erase,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::Clear,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Insert(c),
        _ => return None,
    };

    Some(action)
}
