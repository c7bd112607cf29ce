//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Focus the next input
    FocusNext,
    /// Focus the previous input
    FocusPrevious,
    /// Raise the focused input by one step
    Increase,
    /// Lower the focused input by one step
    Decrease,
    /// Raise the focused input by ten steps
    IncreaseLarge,
    /// Lower the focused input by ten steps
    DecreaseLarge,
    /// Restore default inputs
    Reset,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports both press and release
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => KeyAction::FocusPrevious,
            KeyCode::Right | KeyCode::Char('+' | '=' | 'l') => KeyAction::Increase,
            KeyCode::Left | KeyCode::Char('-' | '_' | 'h') => KeyAction::Decrease,
            KeyCode::PageUp => KeyAction::IncreaseLarge,
            KeyCode::PageDown => KeyAction::DecreaseLarge,
            KeyCode::Char('r') => KeyAction::Reset,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
