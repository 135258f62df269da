//! Calculator form state
//!
//! Error prevention: the form is a small state machine. While a dialog is
//! open nothing but dismissing it (or quitting) changes the form.
//!
//! ```text
//! Idle --calculate--> ShowingResult --dismiss--> Idle
//!      \-calculate--> ShowingError  --dismiss--> Idle
//! ```

use tracing::{debug, info, warn};

use crate::core::{self, CalcError, DerivedResult, Field, RawInputs};

/// Title of the results dialog
pub const RESULTS_TITLE: &str = "Calculation Results";

/// Title of the error dialog
pub const ERROR_TITLE: &str = "Input Error";

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// An entry field
    Field(Field),
    /// The calculate control
    CalculateButton,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(Field::StepAngle)
    }
}

impl Focus {
    /// Focus order, top to bottom
    pub const ORDER: [Self; 5] = [
        Self::Field(Field::StepAngle),
        Self::Field(Field::MicrostepSetting),
        Self::Field(Field::Pitch),
        Self::Field(Field::MaxRpm),
        Self::CalculateButton,
    ];

    fn position(self) -> usize {
        match self {
            Self::Field(field) => field.index(),
            Self::CalculateButton => Self::ORDER.len() - 1,
        }
    }

    /// Next element, wrapping to the top
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous element, wrapping to the bottom
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// A modal dialog over the form
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Successful calculation
    Results(DerivedResult),
    /// Rejected input
    Error(CalcError),
}

impl Dialog {
    /// Window title of the dialog
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Results(_) => RESULTS_TITLE,
            Self::Error(_) => ERROR_TITLE,
        }
    }

    /// Body text, one entry per line
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Results(result) => result.report_lines().to_vec(),
            Self::Error(error) => vec![error.dialog_message()],
        }
    }

    /// Returns true for the error dialog
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Coarse form state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Accepting edits
    Idle,
    /// Results dialog open
    ShowingResult,
    /// Error dialog open
    ShowingError,
}

/// The calculator form: four entries, a focus, and at most one dialog
#[derive(Debug, Default)]
pub struct CalculatorForm {
    inputs: RawInputs,
    /// Cursor per field, as a byte offset on a char boundary
    cursors: [usize; 4],
    focus: Focus,
    dialog: Option<Dialog>,
    should_quit: bool,
}

impl CalculatorForm {
    /// Creates an empty form with focus on the first field
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current entry texts
    #[must_use]
    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Returns the text of one entry
    #[must_use]
    pub fn field_text(&self, field: Field) -> &str {
        self.inputs.get(field)
    }

    /// Returns the cursor of one entry
    #[must_use]
    pub fn cursor(&self, field: Field) -> usize {
        self.cursors[field.index()]
    }

    /// Returns the focused element
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the open dialog
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns the coarse state
    #[must_use]
    pub fn state(&self) -> FormState {
        match &self.dialog {
            None => FormState::Idle,
            Some(Dialog::Results(_)) => FormState::ShowingResult,
            Some(Dialog::Error(_)) => FormState::ShowingError,
        }
    }

    /// Returns whether the user asked to quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn is_modal(&self) -> bool {
        self.dialog.is_some()
    }

    fn focused_field(&self) -> Option<Field> {
        match self.focus() {
            Focus::Field(field) if !self.is_modal() => Some(field),
            _ => None,
        }
    }

    /// Moves focus to an element
    pub fn set_focus(&mut self, focus: Focus) {
        if !self.is_modal() {
            self.focus = focus;
        }
    }

    /// Moves focus down
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus().next());
    }

    /// Moves focus up
    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus().previous());
    }

    /// Replaces the text of an entry and puts its cursor at the end
    pub fn set_field(&mut self, field: Field, text: &str) {
        if self.is_modal() {
            return;
        }
        self.inputs.set(field, text);
        self.cursors[field.index()] = text.len();
    }

    /// Inserts a character at the cursor of the focused entry
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let cursor = self.cursors[field.index()];
            self.inputs.get_mut(field).insert(cursor, c);
            self.cursors[field.index()] = cursor + c.len_utf8();
        }
    }

    /// Deletes the character before the cursor (backspace)
    pub fn delete_char(&mut self) {
        if let Some(field) = self.focused_field() {
            let cursor = self.cursors[field.index()];
            let text = self.inputs.get_mut(field);
            let previous = text[..cursor].chars().next_back();
            if let Some(c) = previous {
                let at = cursor - c.len_utf8();
                text.remove(at);
                self.cursors[field.index()] = at;
            }
        }
    }

    /// Deletes the character at the cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if let Some(field) = self.focused_field() {
            let cursor = self.cursors[field.index()];
            let text = self.inputs.get_mut(field);
            if cursor < text.len() {
                text.remove(cursor);
            }
        }
    }

    /// Moves the cursor one character left
    pub fn move_cursor_left(&mut self) {
        if let Some(field) = self.focused_field() {
            let cursor = self.cursors[field.index()];
            if let Some(c) = self.inputs.get(field)[..cursor].chars().next_back() {
                self.cursors[field.index()] = cursor - c.len_utf8();
            }
        }
    }

    /// Moves the cursor one character right
    pub fn move_cursor_right(&mut self) {
        if let Some(field) = self.focused_field() {
            let cursor = self.cursors[field.index()];
            if let Some(c) = self.inputs.get(field)[cursor..].chars().next() {
                self.cursors[field.index()] = cursor + c.len_utf8();
            }
        }
    }

    /// Moves the cursor to the start of the entry
    pub fn move_cursor_start(&mut self) {
        if let Some(field) = self.focused_field() {
            self.cursors[field.index()] = 0;
        }
    }

    /// Moves the cursor to the end of the entry
    pub fn move_cursor_end(&mut self) {
        if let Some(field) = self.focused_field() {
            self.cursors[field.index()] = self.inputs.get(field).len();
        }
    }

    /// Clears the focused entry
    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            self.inputs.get_mut(field).clear();
            self.cursors[field.index()] = 0;
        }
    }

    /// Reads the four entries once, computes, and opens the matching dialog
    ///
    /// Does nothing while a dialog is already open.
    pub fn calculate(&mut self) {
        if self.is_modal() {
            debug!("calculate ignored, dialog open");
            return;
        }

        let dialog = match core::calculate(&self.inputs) {
            Ok(result) => {
                info!(
                    steps_per_mm = result.steps_per_millimeter,
                    max_speed = result.max_linear_speed,
                    "calculation complete"
                );
                Dialog::Results(result)
            }
            Err(error) => {
                warn!(%error, "input rejected");
                Dialog::Error(error)
            }
        };
        debug!(title = dialog.title(), "dialog opened");
        self.dialog = Some(dialog);
    }

    /// Closes the open dialog
    ///
    /// After an error the offending entry takes focus.
    pub fn dismiss_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            debug!(title = dialog.title(), "dialog dismissed");
            if let Dialog::Error(error) = dialog {
                if let Some(field) = error.field() {
                    self.focus = Focus::Field(field);
                }
            }
        }
    }
}
