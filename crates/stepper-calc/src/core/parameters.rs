//! Drive parameter arithmetic
//!
//! Anomaly: zero divisors and overflowed results are refused before they can
//! reach the display.

use std::fmt;

use crate::core::{CalcError, CalcResult, Field, FormInputs};

/// Number of thread starts on the lead screw; lead = pitch × starts
pub const LEAD_SCREW_STARTS: f64 = 4.0;

/// Degrees in one motor revolution
pub const FULL_REVOLUTION_DEGREES: f64 = 360.0;

/// Parameters derived from one set of form inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedResult {
    /// Linear travel per motor revolution, mm
    pub lead: f64,
    /// Full steps per motor revolution
    pub full_steps_per_revolution: f64,
    /// Microsteps per motor revolution
    pub microsteps_per_revolution: f64,
    /// Microsteps per millimeter of travel
    pub steps_per_millimeter: f64,
    /// Travel speed at maximum RPM, mm/min
    pub max_linear_speed: f64,
}

impl DerivedResult {
    /// Lines of the results dialog, two decimals each
    #[must_use]
    pub fn report_lines(&self) -> [String; 4] {
        [
            format!(
                "Full steps per revolution: {:.2}",
                self.full_steps_per_revolution
            ),
            format!(
                "Microsteps per revolution: {:.2}",
                self.microsteps_per_revolution
            ),
            format!("Steps per millimeter: {:.2}", self.steps_per_millimeter),
            format!("Maximum linear speed: {:.2} mm/min", self.max_linear_speed),
        ]
    }
}

impl fmt::Display for DerivedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

/// Computes the drive parameters
///
/// A zero step angle or a zero lead is a [`CalcError::DivisionByZero`];
/// a derived value that overflows is a [`CalcError::NonFiniteResult`].
pub fn compute(inputs: &FormInputs) -> CalcResult<DerivedResult> {
    let lead = inputs.pitch * LEAD_SCREW_STARTS;

    if inputs.step_angle == 0.0 {
        return Err(CalcError::DivisionByZero {
            field: Field::StepAngle,
        });
    }
    if lead == 0.0 {
        return Err(CalcError::DivisionByZero { field: Field::Pitch });
    }

    let full_steps_per_revolution = FULL_REVOLUTION_DEGREES / inputs.step_angle;
    let microsteps_per_revolution = full_steps_per_revolution * inputs.microstep_setting as f64;
    let steps_per_millimeter = microsteps_per_revolution / lead;
    let max_linear_speed = lead * inputs.max_rpm;

    Ok(DerivedResult {
        lead: finite("lead", lead)?,
        full_steps_per_revolution: finite("full steps per revolution", full_steps_per_revolution)?,
        microsteps_per_revolution: finite("microsteps per revolution", microsteps_per_revolution)?,
        steps_per_millimeter: finite("steps per millimeter", steps_per_millimeter)?,
        max_linear_speed: finite("maximum linear speed", max_linear_speed)?,
    })
}

fn finite(quantity: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(step_angle: f64, microstep_setting: i64, pitch: f64, max_rpm: f64) -> FormInputs {
        FormInputs {
            step_angle,
            microstep_setting,
            pitch,
            max_rpm,
        }
    }

    // ===== Formula tests =====

    #[test]
    fn test_nema17_sixteenth_steps() {
        let r = compute(&inputs(1.8, 16, 2.0, 600.0)).unwrap();
        assert_eq!(r.lead, 8.0);
        assert_eq!(r.full_steps_per_revolution, 200.0);
        assert_eq!(r.microsteps_per_revolution, 3200.0);
        assert_eq!(r.steps_per_millimeter, 400.0);
        assert_eq!(r.max_linear_speed, 4800.0);
    }

    #[test]
    fn test_half_degree_motor() {
        let r = compute(&inputs(0.9, 8, 1.25, 300.0)).unwrap();
        assert_eq!(r.lead, 5.0);
        assert_eq!(r.full_steps_per_revolution, 400.0);
        assert_eq!(r.microsteps_per_revolution, 3200.0);
        assert_eq!(r.steps_per_millimeter, 640.0);
        assert_eq!(r.max_linear_speed, 1500.0);
    }

    #[test]
    fn test_lead_uses_four_starts() {
        let r = compute(&inputs(1.8, 1, 3.0, 1.0)).unwrap();
        assert_eq!(r.lead, 3.0 * LEAD_SCREW_STARTS);
        assert_eq!(r.max_linear_speed, 12.0);
    }

    #[test]
    fn test_zero_microsteps() {
        let r = compute(&inputs(1.8, 0, 2.0, 600.0)).unwrap();
        assert_eq!(r.microsteps_per_revolution, 0.0);
        assert_eq!(r.steps_per_millimeter, 0.0);
    }

    #[test]
    fn test_zero_rpm() {
        let r = compute(&inputs(1.8, 16, 2.0, 0.0)).unwrap();
        assert_eq!(r.max_linear_speed, 0.0);
    }

    // ===== Guard tests =====

    #[test]
    fn test_zero_step_angle_rejected() {
        assert_eq!(
            compute(&inputs(0.0, 16, 2.0, 600.0)),
            Err(CalcError::DivisionByZero {
                field: Field::StepAngle
            })
        );
    }

    #[test]
    fn test_negative_zero_step_angle_rejected() {
        assert!(compute(&inputs(-0.0, 16, 2.0, 600.0)).is_err());
    }

    #[test]
    fn test_zero_pitch_rejected() {
        assert_eq!(
            compute(&inputs(1.8, 16, 0.0, 600.0)),
            Err(CalcError::DivisionByZero { field: Field::Pitch })
        );
    }

    #[test]
    fn test_step_angle_checked_before_pitch() {
        let err = compute(&inputs(0.0, 16, 0.0, 600.0)).unwrap_err();
        assert_eq!(err.field(), Some(Field::StepAngle));
    }

    #[test]
    fn test_overflowing_steps_rejected() {
        let err = compute(&inputs(1e-320, 16, 2.0, 600.0)).unwrap_err();
        assert!(matches!(err, CalcError::NonFiniteResult { .. }));
    }

    #[test]
    fn test_overflowing_speed_rejected() {
        let err = compute(&inputs(1.8, 16, 1e300, 1e300)).unwrap_err();
        assert_eq!(
            err,
            CalcError::NonFiniteResult {
                quantity: "maximum linear speed"
            }
        );
    }

    // ===== Report tests =====

    #[test]
    fn test_report_lines() {
        let r = compute(&inputs(1.8, 16, 2.0, 600.0)).unwrap();
        assert_eq!(
            r.report_lines(),
            [
                "Full steps per revolution: 200.00".to_string(),
                "Microsteps per revolution: 3200.00".to_string(),
                "Steps per millimeter: 400.00".to_string(),
                "Maximum linear speed: 4800.00 mm/min".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_rounds_to_two_decimals() {
        let r = compute(&inputs(7.5, 3, 0.7, 123.456)).unwrap();
        let text = r.to_string();
        assert!(text.contains("Full steps per revolution: 48.00"));
        assert!(text.contains("Steps per millimeter: 51.43"));
        assert!(text.contains("Maximum linear speed: 345.68 mm/min"));
    }

    #[test]
    fn test_display_joins_lines() {
        let r = compute(&inputs(0.9, 8, 1.25, 300.0)).unwrap();
        assert_eq!(r.to_string().lines().count(), 4);
    }
}
