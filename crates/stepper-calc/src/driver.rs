//! Form drivers
//!
//! A scenario is written once against [`FormDriver`] and run both on the bare
//! form model and through the TUI key path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Field;
use crate::form::{CalculatorForm, Dialog, Focus};
use crate::tui::{CalculatorApp, InputHandler};

/// Abstract driver for form interactions
pub trait FormDriver {
    /// Replaces the text of an entry
    fn set_field(&mut self, field: Field, text: &str);

    /// Returns the text of an entry
    fn field_text(&self, field: Field) -> String;

    /// Presses the calculate control
    fn press_calculate(&mut self);

    /// Returns what the open dialog shows
    fn dialog(&self) -> Option<DialogView>;

    /// Presses the dismiss control of the open dialog
    fn dismiss(&mut self);

    /// Fills all four entries in form order
    fn fill(&mut self, values: [&str; 4]) {
        for (field, value) in Field::ALL.into_iter().zip(values) {
            self.set_field(field, value);
        }
    }
}

/// What a dialog shows, independent of how it is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    /// Window title
    pub title: String,
    /// Body lines
    pub lines: Vec<String>,
    /// Whether it is the error dialog
    pub is_error: bool,
}

impl From<&Dialog> for DialogView {
    fn from(dialog: &Dialog) -> Self {
        Self {
            title: dialog.title().to_string(),
            lines: dialog.lines(),
            is_error: dialog.is_error(),
        }
    }
}

/// Driver calling the form model directly
#[derive(Debug, Default)]
pub struct ModelDriver {
    form: CalculatorForm,
}

impl ModelDriver {
    /// Creates a driver over an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying form
    #[must_use]
    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }
}

impl FormDriver for ModelDriver {
    fn set_field(&mut self, field: Field, text: &str) {
        self.form.set_field(field, text);
    }

    fn field_text(&self, field: Field) -> String {
        self.form.field_text(field).to_string()
    }

    fn press_calculate(&mut self) {
        self.form.calculate();
    }

    fn dialog(&self) -> Option<DialogView> {
        self.form.dialog().map(DialogView::from)
    }

    fn dismiss(&mut self) {
        self.form.dismiss_dialog();
    }
}

/// Driver sending synthesized key presses through the TUI input handler
#[derive(Debug)]
pub struct TuiDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl Default for TuiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiDriver {
    /// Creates a TUI driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_app(CalculatorApp::new())
    }

    /// Creates a TUI driver with an existing app
    #[must_use]
    pub fn with_app(app: CalculatorApp) -> Self {
        Self {
            app,
            input: InputHandler::new(),
        }
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Presses a key
    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    /// Presses a key with modifiers
    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let action = self.input.handle_key(KeyEvent::new(code, modifiers));
        self.app.apply(action);
    }

    /// Tabs until `target` has focus
    fn focus(&mut self, target: Focus) {
        for _ in 0..Focus::ORDER.len() {
            if self.app.form().focus() == target {
                return;
            }
            self.press(KeyCode::Tab);
        }
    }
}

impl FormDriver for TuiDriver {
    fn set_field(&mut self, field: Field, text: &str) {
        self.focus(Focus::Field(field));
        self.press_with(KeyCode::Char('u'), KeyModifiers::CONTROL);
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn field_text(&self, field: Field) -> String {
        self.app.form().field_text(field).to_string()
    }

    fn press_calculate(&mut self) {
        self.focus(Focus::CalculateButton);
        self.press(KeyCode::Enter);
    }

    fn dialog(&self) -> Option<DialogView> {
        self.app.form().dialog().map(DialogView::from)
    }

    fn dismiss(&mut self) {
        self.press(KeyCode::Enter);
    }
}

// ===== Unified scenario checks =====
// These work with ANY FormDriver implementation

/// 1.8° motor, 1/16 microstepping, 2 mm pitch, 600 RPM
pub fn verify_nema17_scenario<D: FormDriver>(driver: &mut D) {
    driver.fill(["1.8", "16", "2", "600"]);
    driver.press_calculate();

    let dialog = driver.dialog().expect("results dialog");
    assert_eq!(dialog.title, "Calculation Results");
    assert!(!dialog.is_error);
    assert_eq!(
        dialog.lines,
        vec![
            "Full steps per revolution: 200.00",
            "Microsteps per revolution: 3200.00",
            "Steps per millimeter: 400.00",
            "Maximum linear speed: 4800.00 mm/min",
        ]
    );
    driver.dismiss();
    assert!(driver.dialog().is_none());
}

/// 0.9° motor, 1/8 microstepping, 1.25 mm pitch, 300 RPM
pub fn verify_half_degree_scenario<D: FormDriver>(driver: &mut D) {
    driver.fill(["0.9", "8", "1.25", "300"]);
    driver.press_calculate();

    let dialog = driver.dialog().expect("results dialog");
    assert_eq!(
        dialog.lines,
        vec![
            "Full steps per revolution: 400.00",
            "Microsteps per revolution: 3200.00",
            "Steps per millimeter: 640.00",
            "Maximum linear speed: 1500.00 mm/min",
        ]
    );
    driver.dismiss();
}

/// Non-numeric step angle: error dialog, form survives
pub fn verify_invalid_input<D: FormDriver>(driver: &mut D) {
    driver.fill(["abc", "16", "2", "600"]);
    driver.press_calculate();

    let dialog = driver.dialog().expect("error dialog");
    assert!(dialog.is_error);
    assert_eq!(dialog.title, "Input Error");
    assert!(dialog.lines[0].starts_with("Invalid input:"));
    assert!(dialog.lines[0].contains("abc"));

    driver.dismiss();
    assert!(driver.dialog().is_none());
    assert_eq!(driver.field_text(Field::StepAngle), "abc");

    driver.set_field(Field::StepAngle, "1.8");
    driver.press_calculate();
    assert!(!driver.dialog().expect("results dialog").is_error);
    driver.dismiss();
}

/// Zero step angle is refused instead of dividing by zero
pub fn verify_zero_step_angle<D: FormDriver>(driver: &mut D) {
    driver.fill(["0", "16", "2", "600"]);
    driver.press_calculate();

    let dialog = driver.dialog().expect("error dialog");
    assert!(dialog.is_error);
    assert!(dialog.lines[0].contains("division by zero"));
    driver.dismiss();
}

/// Same inputs, same dialog
pub fn verify_idempotent<D: FormDriver>(driver: &mut D) {
    driver.fill(["1.8", "32", "1.5", "450"]);
    driver.press_calculate();
    let first = driver.dialog();
    driver.dismiss();
    driver.press_calculate();
    assert_eq!(driver.dialog(), first);
    driver.dismiss();
}

/// Complete suite
pub fn run_all_scenarios<D: FormDriver>(driver: &mut D) {
    verify_nema17_scenario(driver);
    verify_half_degree_scenario(driver);
    verify_invalid_input(driver);
    verify_zero_step_angle(driver);
    verify_idempotent(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ModelDriver tests =====

    #[test]
    fn test_model_driver_new() {
        let driver = ModelDriver::new();
        assert!(driver.dialog().is_none());
        assert!(driver.field_text(Field::Pitch).is_empty());
    }

    #[test]
    fn test_model_driver_full_suite() {
        let mut driver = ModelDriver::new();
        run_all_scenarios(&mut driver);
    }

    // ===== TuiDriver tests =====

    #[test]
    fn test_tui_driver_set_field_replaces_text() {
        let mut driver = TuiDriver::new();
        driver.set_field(Field::MaxRpm, "600");
        driver.set_field(Field::MaxRpm, "300");
        assert_eq!(driver.field_text(Field::MaxRpm), "300");
    }

    #[test]
    fn test_tui_driver_reaches_button() {
        let mut driver = TuiDriver::new();
        driver.press_calculate();
        assert_eq!(driver.app().form().focus(), Focus::CalculateButton);
        assert!(driver.dialog().unwrap().is_error);
    }

    #[test]
    fn test_tui_driver_quit_key() {
        let mut driver = TuiDriver::new();
        driver.press_with(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(driver.app().should_quit());
    }

    #[test]
    fn test_tui_driver_scenarios() {
        let mut driver = TuiDriver::new();
        verify_nema17_scenario(&mut driver);
        verify_half_degree_scenario(&mut driver);
    }

    #[test]
    fn test_tui_driver_error_scenarios() {
        let mut driver = TuiDriver::new();
        verify_invalid_input(&mut driver);
        verify_zero_step_angle(&mut driver);
    }

    #[test]
    fn test_tui_driver_full_suite() {
        let mut driver = TuiDriver::default();
        run_all_scenarios(&mut driver);
    }

    // ===== DialogView tests =====

    #[test]
    fn test_dialog_view_from_error() {
        let mut form = CalculatorForm::new();
        form.calculate();
        let view = DialogView::from(form.dialog().unwrap());
        assert!(view.is_error);
        assert_eq!(view.lines.len(), 1);
    }
}
