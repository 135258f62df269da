//! Keyboard input handling
//!
//! Error prevention: keys become typed actions before they touch the form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused entry
    InsertChar(char),
    /// Delete character before cursor (backspace)
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move cursor to start
    CursorHome,
    /// Move cursor to end
    CursorEnd,
    /// Focus the next element
    FocusNext,
    /// Focus the previous element
    FocusPrevious,
    /// Calculate, or close the open dialog
    Activate,
    /// Close the open dialog, or clear the focused entry
    Cancel,
    /// Clear the focused entry
    ClearField,
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
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('a') => KeyAction::CursorHome,
                KeyCode::Char('e') => KeyAction::CursorEnd,
                KeyCode::Char('u') => KeyAction::ClearField,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if !c.is_control() => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Home => KeyAction::CursorHome,
            KeyCode::End => KeyAction::CursorEnd,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrevious,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Cancel,
            _ => KeyAction::None,
        }
    }
}
