//! Terminal front-end
//!
//! The event loop reads one key, applies it to [`BreakEvenApp`] (which
//! recomputes synchronously), and redraws.

mod app;
mod input;
mod ui;

pub use app::{BreakEvenApp, LARGE_STEP};
pub use input::{InputHandler, KeyAction};
pub use ui::{render, BreakEvenUI, APP_TITLE, HELP_SHORTCUTS};

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

/// Leaves the alternate screen and shows the cursor on `out`
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Raw mode and alternate screen, undone on drop
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    /// Enters raw mode, then the alternate screen.
    ///
    /// The guard exists before the alternate screen is entered, so a
    /// failure there still disables raw mode.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
    }
}

/// Restores the terminal before the default panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        previous(panic_info);
    }));
}

/// Runs the interactive calculator until the user quits.
///
/// The terminal is restored on every exit path, including errors during
/// setup and panics.
pub fn run(app: BreakEvenApp) -> io::Result<()> {
    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("starting terminal UI");
    run_app(&mut terminal, app)
}

/// Draw/read loop over any backend
pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: BreakEvenApp,
) -> io::Result<()> {
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        if let Event::Key(key) = event::read()? {
            app.apply(input_handler.handle_key(key));
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
