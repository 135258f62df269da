//! Form configuration

use std::path::{Path, PathBuf};

/// Fixed size of the form window, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl WindowSize {
    /// Creates a window size
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(50, 18)
    }
}

/// Settings for one run of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Size of the form window
    pub window: WindowSize,
    /// PNG shown in the error dialog; `None` uses the icon built into the binary
    pub icon_path: Option<PathBuf>,
    /// Icon size in cells (columns, rows)
    pub icon_cells: (u16, u16),
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            window: WindowSize::default(),
            icon_path: None,
            icon_cells: (6, 3),
        }
    }
}

impl FormConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window size
    #[must_use]
    pub const fn with_window(mut self, window: WindowSize) -> Self {
        self.window = window;
        self
    }

    /// Loads the icon from a file instead of the built-in one
    #[must_use]
    pub fn with_icon_path(mut self, path: impl AsRef<Path>) -> Self {
        self.icon_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the icon size in cells
    #[must_use]
    pub const fn with_icon_cells(mut self, columns: u16, rows: u16) -> Self {
        self.icon_cells = (columns, rows);
        self
    }
}
