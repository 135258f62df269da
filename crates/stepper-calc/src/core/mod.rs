//! Core stepper arithmetic, free of any UI dependency
//!
//! Entry text goes in, a [`DerivedResult`] or a [`CalcError`] comes out.
//! Everything the form shows is produced here.

mod inputs;
mod parameters;

pub use inputs::{Field, FormInputs, NumberKind, RawInputs};
pub use parameters::{compute, DerivedResult, FULL_REVOLUTION_DEGREES, LEAD_SCREW_STARTS};

use thiserror::Error;

/// Longest stretch of entry text echoed back in an error message
pub const ECHO_LIMIT: usize = 40;

/// Result type for stepper calculations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons a calculation is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An entry field did not hold a usable number of its required kind
    #[error("{field} must be {expected}, got {:?} ({reason})", abbreviate(.value))]
    InvalidInput {
        /// Field the text came from
        field: Field,
        /// Text as typed
        value: String,
        /// Kind of number the field requires
        expected: NumberKind,
        /// Parser's description of the failure
        reason: String,
    },

    /// A divisor derived from this field is zero
    #[error("{field} must not be zero (division by zero)")]
    DivisionByZero {
        /// Field whose value makes the divisor zero
        field: Field,
    },

    /// A derived quantity overflowed
    #[error("{quantity} is not a finite number")]
    NonFiniteResult {
        /// Name of the derived quantity
        quantity: &'static str,
    },
}

impl CalcError {
    /// Creates an invalid input error
    #[must_use]
    pub fn invalid_input(
        field: Field,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            expected: field.kind(),
            reason: reason.to_string(),
        }
    }

    /// Returns the field the error points at, if any
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidInput { field, .. } | Self::DivisionByZero { field } => Some(*field),
            Self::NonFiniteResult { .. } => None,
        }
    }

    /// Message shown in the error dialog
    #[must_use]
    pub fn dialog_message(&self) -> String {
        format!("Invalid input: {self}")
    }
}

/// Shortens `text` to [`ECHO_LIMIT`] chars, marking the cut with `…`
fn abbreviate(text: &str) -> String {
    match text.char_indices().nth(ECHO_LIMIT) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Parses the raw entry texts and computes the derived parameters
pub fn calculate(raw: &RawInputs) -> CalcResult<DerivedResult> {
    let inputs = raw.parse()?;
    compute(&inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display tests =====

    #[test]
    fn test_invalid_input_display() {
        let err = CalcError::invalid_input(Field::StepAngle, "abc", "invalid float literal");
        assert_eq!(
            err.to_string(),
            "step angle must be a floating-point number, got \"abc\" (invalid float literal)"
        );
    }

    #[test]
    fn test_invalid_input_expected_follows_field() {
        let err = CalcError::invalid_input(Field::MicrostepSetting, "1.5", "bad");
        assert!(matches!(
            err,
            CalcError::InvalidInput {
                expected: NumberKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_input_echo_is_bounded() {
        let long = "x".repeat(70_000);
        let err = CalcError::invalid_input(Field::StepAngle, long.as_str(), "invalid float literal");
        let message = err.to_string();
        assert!(message.contains(&format!("\"{}…\"", "x".repeat(ECHO_LIMIT))));
        assert!(message.chars().count() < 200);
        // The stored value is untouched
        assert!(matches!(err, CalcError::InvalidInput { value, .. } if value == long));
    }

    #[test]
    fn test_abbreviate_keeps_short_text() {
        assert_eq!(abbreviate("abc"), "abc");
        assert_eq!(abbreviate(&"é".repeat(ECHO_LIMIT)), "é".repeat(ECHO_LIMIT));
        assert_eq!(
            abbreviate(&"é".repeat(ECHO_LIMIT + 1)),
            format!("{}…", "é".repeat(ECHO_LIMIT))
        );
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = CalcError::DivisionByZero {
            field: Field::StepAngle,
        };
        assert_eq!(
            err.to_string(),
            "step angle must not be zero (division by zero)"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = CalcError::NonFiniteResult {
            quantity: "steps per millimeter",
        };
        assert_eq!(err.to_string(), "steps per millimeter is not a finite number");
    }

    #[test]
    fn test_dialog_message_prefix() {
        let err = CalcError::DivisionByZero { field: Field::Pitch };
        assert!(err.dialog_message().starts_with("Invalid input: pitch"));
    }

    #[test]
    fn test_error_field() {
        let err = CalcError::invalid_input(Field::MaxRpm, "", "empty");
        assert_eq!(err.field(), Some(Field::MaxRpm));
        let err = CalcError::NonFiniteResult { quantity: "x" };
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero {
            field: Field::Pitch,
        });
        assert!(err.to_string().contains("division by zero"));
    }

    // ===== calculate tests =====

    #[test]
    fn test_calculate_from_text() {
        let raw = RawInputs::new("1.8", "16", "2", "600");
        let result = calculate(&raw).unwrap();
        assert_eq!(result.steps_per_millimeter, 400.0);
    }

    #[test]
    fn test_calculate_rejects_text() {
        let raw = RawInputs::new("abc", "16", "2", "600");
        assert!(matches!(
            calculate(&raw),
            Err(CalcError::InvalidInput {
                field: Field::StepAngle,
                ..
            })
        ));
    }
}
