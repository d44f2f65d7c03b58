//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use fitcoach_core::wire::ChatResponse;

/// Which trigger a backend reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Boot,
    Submit,
}

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    /// A `/chat` call resolved. `None` means the client gave up.
    Reply {
        kind: RequestKind,
        response: Option<Box<ChatResponse>>,
    },
}
