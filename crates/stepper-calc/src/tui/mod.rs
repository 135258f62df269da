//! TUI frontend for the calculator form
//!
//! Visual feedback through a fixed-size terminal window

mod app;
mod input;
pub mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, IconWidget, DISMISS_LABEL, HELP_HINT};
