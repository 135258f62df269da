//! Application-level errors

use thiserror::Error;

/// Result type for running the application
pub type AppResult<T> = Result<T, AppError>;

/// Failures that stop the application
///
/// Calculation problems never end up here; the form shows them in its
/// error dialog instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, or event reading failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
