//! Stepper motor drive parameter calculator
//!
//! A single-screen form for configuring the motion controller of a PCB
//! drilling and milling machine. Four inputs (step angle, microstep setting,
//! screw pitch, maximum RPM) give full steps per revolution, microsteps per
//! revolution, steps per millimeter and the maximum linear speed.
//!
//! The arithmetic in [`core`] has no UI dependency; [`form`] holds the
//! dialog state machine and [`tui`] draws it in the terminal.
//!
//! # Example
//!
//! ```rust
//! use stepper_calc::prelude::*;
//!
//! let raw = RawInputs::new("1.8", "16", "2", "600");
//! let result = calculate(&raw).unwrap();
//! assert_eq!(result.steps_per_millimeter, 400.0);
//! assert_eq!(result.max_linear_speed, 4800.0);
//!
//! // A zero step angle is refused rather than producing infinity
//! let raw = RawInputs::new("0", "16", "2", "600");
//! assert!(matches!(calculate(&raw), Err(CalcError::DivisionByZero { .. })));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod form;
pub mod icon;
pub mod layout;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{FormConfig, WindowSize};
    pub use crate::core::{
        calculate, compute, CalcError, CalcResult, DerivedResult, Field, FormInputs, NumberKind,
        RawInputs, LEAD_SCREW_STARTS,
    };
    pub use crate::driver::{DialogView, FormDriver, ModelDriver, TuiDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::form::{CalculatorForm, Dialog, Focus, FormState};
    pub use crate::icon::ErrorIcon;
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
