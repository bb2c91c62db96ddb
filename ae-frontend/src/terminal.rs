use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    terminal::{self, EnterAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::AppError;

pub struct TerminalWrapper {
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        stderr().execute(EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
        terminal.clear()?;

        Ok(Self {
            inner: Some(terminal),
        })
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        self.inner = None;

        terminal::disable_raw_mode()?;
        stderr().execute(terminal::LeaveAlternateScreen)?;

        Ok(())
    }

    /// Wipes the screen and forgets what was drawn, so the next draw
    /// repaints every cell.
    pub fn clear(&mut self) -> Result<(), AppError> {
        match &mut self.inner {
            Some(term) => Ok(term.clear()?),
            None => Err(AppError::TerminalNotInitialized),
        }
    }

    pub fn draw(&mut self, layout: impl FnOnce(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.draw(layout)?;
            Ok(())
        } else {
            Err(AppError::TerminalNotInitialized)
        }
    }
}
