//! Stepper Motor Calculator
//!
//! ## Usage
//!
//! ```bash
//! stepper-calc                         # open the form
//! RUST_LOG=debug stepper-calc 2>log    # with diagnostics on stderr
//! ```

use std::io;
use std::process::ExitCode;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use stepper_calc::config::FormConfig;
use stepper_calc::error::{AppError, AppResult};
use stepper_calc::tui::{render, terminal, CalculatorApp, InputHandler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, and only when `RUST_LOG` asks for them
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .with_ansi(false)
            .init();
    }
}

fn run() -> AppResult<()> {
    let mut app = CalculatorApp::with_config(FormConfig::default());

    terminal::enter()?;
    let outcome = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(AppError::from)
        .and_then(|mut tui| run_app(&mut tui, &mut app));

    // Restore the terminal even when setup or the loop failed
    terminal::finish(outcome, terminal::restore_steps())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();
    info!("form opened");

    while !app.should_quit() {
        terminal.draw(|f| render(app, f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.apply(input_handler.handle_key(key));
            }
        }
    }

    info!("form closed");
    Ok(())
}
