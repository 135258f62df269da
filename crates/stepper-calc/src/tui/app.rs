//! TUI application state

use crate::config::FormConfig;
use crate::form::{CalculatorForm, Focus};
use crate::icon::ErrorIcon;

use super::input::KeyAction;

/// Calculator application: the form plus what is needed to draw it
#[derive(Debug)]
pub struct CalculatorApp {
    form: CalculatorForm,
    config: FormConfig,
    icon: Option<ErrorIcon>,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Creates an app, loading the error icon named by `config`
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        let (columns, rows) = config.icon_cells;
        let icon = match &config.icon_path {
            Some(path) => ErrorIcon::load(path, columns, rows),
            None => ErrorIcon::bundled(columns, rows),
        };
        Self {
            form: CalculatorForm::new(),
            config,
            icon,
        }
    }

    /// Returns the form
    #[must_use]
    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Returns the form for direct manipulation (for testing)
    pub fn form_mut(&mut self) -> &mut CalculatorForm {
        &mut self.form
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns the error icon, if it could be loaded
    #[must_use]
    pub fn icon(&self) -> Option<&ErrorIcon> {
        self.icon.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.form.should_quit()
    }

    /// Applies a key action
    ///
    /// With a dialog open only Quit and the dismiss keys do anything.
    pub fn apply(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.form.quit();
            return;
        }

        if self.form.dialog().is_some() {
            if matches!(
                action,
                KeyAction::Activate | KeyAction::Cancel | KeyAction::InsertChar(' ')
            ) {
                self.form.dismiss_dialog();
            }
            return;
        }

        match action {
            KeyAction::InsertChar(' ') if self.form.focus() == Focus::CalculateButton => {
                self.form.calculate();
            }
            KeyAction::InsertChar(c) => self.form.insert_char(c),
            KeyAction::Backspace => self.form.delete_char(),
            KeyAction::Delete => self.form.delete_char_forward(),
            KeyAction::CursorLeft => self.form.move_cursor_left(),
            KeyAction::CursorRight => self.form.move_cursor_right(),
            KeyAction::CursorHome => self.form.move_cursor_start(),
            KeyAction::CursorEnd => self.form.move_cursor_end(),
            KeyAction::FocusNext => self.form.focus_next(),
            KeyAction::FocusPrevious => self.form.focus_previous(),
            KeyAction::Activate => self.form.calculate(),
            KeyAction::Cancel | KeyAction::ClearField => self.form.clear_field(),
            KeyAction::Quit | KeyAction::None => {}
        }
    }
}
