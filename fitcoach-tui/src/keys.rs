//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which component currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Chat,
    WorkoutPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,
    OpenWorkouts,
    Cancel,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    /// Forwarded to the input box.
    Edit(KeyEvent),
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('w') => Some(Action::OpenWorkouts),
            _ if mode == InputMode::Chat => Some(Action::Edit(event)),
            _ => None,
        };
    }

    match mode {
        InputMode::Chat => match code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextPanel),
            KeyCode::BackTab => Some(Action::PrevPanel),
            KeyCode::PageUp => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::ScrollDown),
            _ => Some(Action::Edit(event)),
        },
        InputMode::WorkoutPicker => match code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
            _ => None,
        },
    }
}
