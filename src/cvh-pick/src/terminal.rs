//! Terminal setup and teardown
//!
//! Standard input has usually been consumed by the candidate list, so the UI
//! talks to the controlling terminal directly. Standard output stays free for
//! the selection.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use crate::error::{PickError, Result};
use crate::keymap;
use crate::session::Session;
use crate::ui;

/// Controlling terminal device
pub const TTY_PATH: &str = "/dev/tty";

/// Open the controlling terminal for reading and drawing
pub fn open_tty() -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(TTY_PATH)
        .map_err(|source| PickError::TerminalUnavailable { path: TTY_PATH, source })
}

/// Raw mode plus alternate screen, restored when dropped
pub struct TerminalGuard<W: Write> {
    terminal: Terminal<CrosstermBackend<W>>,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(writer: W) -> Result<Self> {
        // Built before raw mode so that every later failure is undone by Drop
        let terminal = Terminal::new(CrosstermBackend::new(writer))?;
        enable_raw_mode()?;

        let mut guard = Self { terminal };
        execute!(guard.terminal.backend_mut(), EnterAlternateScreen, Hide)?;

        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    /// Run the session until it is committed or cancelled
    pub fn run(&mut self, session: &mut Session, max_height: u16) -> Result<()> {
        while session.is_running() {
            session.rerank();
            self.terminal.draw(|f| ui::draw(f, session, max_height))?;

            // Resize and other events just fall through to the next redraw
            if let Event::Key(key) = event::read()? {
                if let Some(action) = keymap::action_for(key) {
                    session.handle(action);
                }
            }
        }

        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = restore_screen(self.terminal.backend_mut()) {
            warn!("Failed to restore terminal screen: {}", e);
        }
        debug!("Terminal restored");
    }
}

/// Leave the alternate screen and show the cursor again
fn restore_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, LeaveAlternateScreen, Show)
}

/// Drive a session on the controlling terminal and return what was committed
pub fn pick(mut session: Session, max_height: u16) -> Result<Option<String>> {
    let tty = open_tty()?;
    {
        let mut guard = TerminalGuard::enter(tty)?;
        guard.run(&mut session, max_height)?;
    }
    debug!("Session finished: {:?}", session.state());

    Ok(session.into_selection())
}

/// Flush the selection to stdout, NUL- or newline-terminated
pub fn emit<W: Write>(mut out: W, selection: &str, print0: bool) -> io::Result<()> {
    if print0 {
        write!(out, "{}\0", selection)?;
    } else {
        writeln!(out, "{}", selection)?;
    }
    out.flush()
}
