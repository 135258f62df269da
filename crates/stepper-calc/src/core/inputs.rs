//! Entry fields and their parsing
//!
//! Error prevention: each field knows the kind of number it holds, so a
//! microstep setting can never be read as a float by accident.

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult};

/// The four numeric entry fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Degrees of rotation per full motor step
    StepAngle,
    /// Microsteps the driver subdivides each full step into
    MicrostepSetting,
    /// Linear travel per single screw thread turn, in mm
    Pitch,
    /// Maximum motor speed, in revolutions per minute
    MaxRpm,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Self; 4] = [
        Self::StepAngle,
        Self::MicrostepSetting,
        Self::Pitch,
        Self::MaxRpm,
    ];

    /// Label shown next to the entry
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StepAngle => "Step angle (degrees):",
            Self::MicrostepSetting => "Microstep setting:",
            Self::Pitch => "Pitch (mm):",
            Self::MaxRpm => "Maximum RPM:",
        }
    }

    /// Kind of number the field must parse as
    #[must_use]
    pub const fn kind(self) -> NumberKind {
        match self {
            Self::MicrostepSetting => NumberKind::Integer,
            Self::StepAngle | Self::Pitch | Self::MaxRpm => NumberKind::Float,
        }
    }

    /// Position of the field in [`Field::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::StepAngle => 0,
            Self::MicrostepSetting => 1,
            Self::Pitch => 2,
            Self::MaxRpm => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StepAngle => "step angle",
            Self::MicrostepSetting => "microstep setting",
            Self::Pitch => "pitch",
            Self::MaxRpm => "maximum RPM",
        };
        f.write_str(name)
    }
}

/// Kind of number an entry must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Floating-point number
    Float,
    /// Whole number
    Integer,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => f.write_str("a floating-point number"),
            Self::Integer => f.write_str("an integer"),
        }
    }
}

/// Entry texts exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    texts: [String; 4],
}

impl RawInputs {
    /// Creates raw inputs in form order
    #[must_use]
    pub fn new(
        step_angle: impl Into<String>,
        microstep_setting: impl Into<String>,
        pitch: impl Into<String>,
        max_rpm: impl Into<String>,
    ) -> Self {
        Self {
            texts: [
                step_angle.into(),
                microstep_setting.into(),
                pitch.into(),
                max_rpm.into(),
            ],
        }
    }

    /// Returns the text of a field
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    /// Returns the text of a field for editing
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        &mut self.texts[field.index()]
    }

    /// Replaces the text of a field
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.texts[field.index()] = text.into();
    }

    /// Parses every field, stopping at the first one that fails
    pub fn parse(&self) -> CalcResult<FormInputs> {
        Ok(FormInputs {
            step_angle: parse_float(Field::StepAngle, self.get(Field::StepAngle))?,
            microstep_setting: parse_number(
                Field::MicrostepSetting,
                self.get(Field::MicrostepSetting),
            )?,
            pitch: parse_float(Field::Pitch, self.get(Field::Pitch))?,
            max_rpm: parse_float(Field::MaxRpm, self.get(Field::MaxRpm))?,
        })
    }
}

/// Parsed form values, read once per calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInputs {
    /// Degrees per full step
    pub step_angle: f64,
    /// Microsteps per full step
    pub microstep_setting: i64,
    /// Thread pitch in mm
    pub pitch: f64,
    /// Maximum revolutions per minute
    pub max_rpm: f64,
}

fn parse_number<T>(field: Field, text: &str) -> CalcResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| CalcError::invalid_input(field, text, e))
}

fn parse_float(field: Field, text: &str) -> CalcResult<f64> {
    let value: f64 = parse_number(field, text)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, text, "not a finite number"))
    }
}
