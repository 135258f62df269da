//! End-to-end form scenarios, run through both drivers

use stepper_calc::driver::{
    run_all_scenarios, verify_half_degree_scenario, verify_invalid_input,
    verify_nema17_scenario, verify_zero_step_angle,
};
use stepper_calc::prelude::*;

#[test]
fn test_nema17_model() {
    verify_nema17_scenario(&mut ModelDriver::new());
}

#[test]
fn test_nema17_tui() {
    verify_nema17_scenario(&mut TuiDriver::new());
}

#[test]
fn test_half_degree_model() {
    verify_half_degree_scenario(&mut ModelDriver::new());
}

#[test]
fn test_half_degree_tui() {
    verify_half_degree_scenario(&mut TuiDriver::new());
}

#[test]
fn test_invalid_input_tui() {
    verify_invalid_input(&mut TuiDriver::new());
}

#[test]
fn test_zero_step_angle_model() {
    verify_zero_step_angle(&mut ModelDriver::new());
}

#[test]
fn test_error_dialog_without_icon_asset() {
    let config = FormConfig::new().with_icon_path("/nonexistent/error.png");
    let mut driver = TuiDriver::with_app(CalculatorApp::with_config(config));
    assert!(driver.app().icon().is_none());
    verify_invalid_input(&mut driver);
}

#[test]
fn test_invalid_input_shows_no_results() {
    let mut driver = ModelDriver::new();
    driver.fill(["abc", "16", "2", "600"]);
    driver.press_calculate();
    let dialog = driver.dialog().unwrap();
    assert_eq!(dialog.title, "Input Error");
    assert!(dialog.lines.iter().all(|l| !l.contains("Steps per millimeter")));
    assert_eq!(driver.form().state(), FormState::ShowingError);
}

#[test]
fn test_all_scenarios_share_one_form() {
    let mut model = ModelDriver::new();
    run_all_scenarios(&mut model);
    let mut tui = TuiDriver::new();
    run_all_scenarios(&mut tui);
    for field in Field::ALL {
        assert_eq!(model.field_text(field), tui.field_text(field));
    }
}
