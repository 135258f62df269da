//! Terminal setup and teardown
//!
//! Teardown runs every step even when an earlier one fails, so a broken
//! stdout cannot leave the shell in raw mode.

use std::io;

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::AppResult;

/// Switches to raw mode and the alternate screen
///
/// On failure the steps already taken are undone before the error returns.
pub fn enter() -> AppResult<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
        return finish(Err(e.into()), restore_steps());
    }
    Ok(())
}

/// Leaves the alternate screen, disables raw mode and shows the cursor
///
/// All three steps run before any of their results is looked at.
pub fn restore_steps() -> [io::Result<()>; 3] {
    [
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen),
        execute!(io::stdout(), cursor::Show),
    ]
}

/// Combines the outcome of a session with the results of its teardown
///
/// The session's own error wins; otherwise the first failed step is reported.
pub fn finish<T>(
    outcome: AppResult<T>,
    restored: impl IntoIterator<Item = io::Result<()>>,
) -> AppResult<T> {
    let restored = restored.into_iter().fold(Ok(()), Result::and);
    let value = outcome?;
    restored?;
    Ok(value)
}
