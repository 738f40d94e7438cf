// Terminal lifecycle guard.
// Enters raw mode and the alternate screen, and restores both on drop.

use std::io::{self, Write};

use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Result;

pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
}

impl TerminalGuard {
    pub fn new(mouse: bool) -> Result<Self> {
        terminal::enable_raw_mode()?;
        // Raw mode is already on, so any later failure has to undo it here.
        match Self::setup(mouse) {
            Ok(terminal) => Ok(Self { terminal, mouse }),
            Err(err) => {
                restore(&mut io::stdout(), mouse);
                Err(err.into())
            }
        }
    }

    fn setup(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        enter(&mut stdout, mouse)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore(&mut io::stdout(), self.mouse);
    }
}

fn enter(out: &mut impl Write, mouse: bool) -> io::Result<()> {
    out.execute(EnterAlternateScreen)?;
    if mouse {
        out.execute(EnableMouseCapture)?;
    }
    Ok(())
}

/// Best-effort teardown. Safe to call after a partial setup.
fn restore(out: &mut impl Write, mouse: bool) {
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
