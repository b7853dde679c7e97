//! Terminal surface for the TUI.
//!
//! Implements the [`Surface`] trait over a ratatui [`Terminal`] for drawing
//! and an [`EventSource`] for input. [`CrosstermSurface`] adds crossterm raw
//! mode and the alternate screen on top, restored on release and on drop.

use std::io::{self, Stdout, stdout};

use blindpin_app::{PinEvent, Surface};
use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Position,
    style::Style,
};
use thiserror::Error;

use crate::input::{CrosstermEvents, EventSource, convert_event};

/// Terminal surface errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the ratatui backend.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TerminalError {
    fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Surface over a ratatui terminal and an event source.
///
/// Frames are drawn into ratatui's current buffer and committed as a diff on
/// [`Surface::flush`], so only changed cells are written to the backend.
/// Text goes through [`ratatui::buffer::Buffer::set_string`]: wide graphemes
/// take their display width, control characters are dropped and anything
/// past the right edge is clipped.
pub struct TerminalSurface<B, E>
where
    B: Backend,
{
    terminal: Terminal<B>,
    events: E,
    cursor: Position,
}

impl<B, E> TerminalSurface<B, E>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    E: EventSource,
{
    /// Create a surface drawing on `terminal` and reading from `events`.
    pub fn new(terminal: Terminal<B>, events: E) -> Self {
        Self { terminal, events, cursor: Position::ORIGIN }
    }

    /// Underlying ratatui terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Underlying ratatui terminal, mutably.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B, E> Surface for TerminalSurface<B, E>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    E: EventSource,
{
    type Error = TerminalError;

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.terminal.autoresize().map_err(TerminalError::backend)?;
        self.terminal.current_buffer_mut().reset();
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        let buffer = self.terminal.current_buffer_mut();
        // set_string indexes the start cell directly and panics outside the area
        if buffer.area.contains(Position::new(x, y)) {
            buffer.set_string(x, y, text, Style::default());
        }
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) {
        self.cursor = Position::new(x, y);
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.terminal.flush().map_err(TerminalError::backend)?;
        self.terminal.set_cursor_position(self.cursor).map_err(TerminalError::backend)?;
        self.terminal.show_cursor().map_err(TerminalError::backend)?;
        self.terminal.swap_buffers();
        Backend::flush(self.terminal.backend_mut()).map_err(TerminalError::backend)?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<PinEvent, TerminalError> {
        let event = self.events.read()?;
        Ok(convert_event(&event))
    }

    fn release(&mut self) {
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to restore cursor: {:?}", e);
        }
    }
}

/// Raw mode and alternate screen, left again on drop.
///
/// Each step is recorded as it succeeds so a partial acquisition is rolled
/// back exactly as far as it got.
#[derive(Debug, Default)]
struct ScreenGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        let mut guard = Self::default();

        enable_raw_mode()?;
        guard.raw_mode = true;

        stdout().execute(EnterAlternateScreen)?;
        guard.alternate_screen = true;

        Ok(guard)
    }

    fn restore(&mut self) {
        if std::mem::take(&mut self.alternate_screen)
            && let Err(e) = stdout().execute(LeaveAlternateScreen)
        {
            tracing::warn!("Failed to leave alternate screen: {:?}", e);
        }
        if std::mem::take(&mut self.raw_mode)
            && let Err(e) = disable_raw_mode()
        {
            tracing::warn!("Failed to disable raw mode: {:?}", e);
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Full-screen surface on the process's own terminal.
///
/// Owns raw mode and the alternate screen for its lifetime.
pub struct CrosstermSurface {
    inner: TerminalSurface<CrosstermBackend<Stdout>, CrosstermEvents>,
    screen: ScreenGuard,
}

impl CrosstermSurface {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not an interactive terminal or cannot be
    /// switched to raw mode. Anything already enabled is restored first.
    pub fn acquire() -> Result<Self, TerminalError> {
        let screen = ScreenGuard::enter()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.clear()?;

        Ok(Self { inner: TerminalSurface::new(terminal, CrosstermEvents), screen })
    }
}

impl Surface for CrosstermSurface {
    type Error = TerminalError;

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.inner.clear()
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        self.inner.draw_text(x, y, text);
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) {
        self.inner.set_cursor_position(x, y);
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.inner.flush()
    }

    fn poll_event(&mut self) -> Result<PinEvent, TerminalError> {
        self.inner.poll_event()
    }

    fn release(&mut self) {
        self.inner.release();
        self.screen.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_undoes_only_recorded_steps() {
        let mut guard = ScreenGuard { raw_mode: true, alternate_screen: false };

        guard.restore();
        assert!(!guard.raw_mode);
        assert!(!guard.alternate_screen);
    }

    #[test]
    fn restore_is_idempotent() {
        let mut guard = ScreenGuard { raw_mode: true, alternate_screen: false };

        guard.restore();
        guard.restore();
        drop(guard);

        let mut untouched = ScreenGuard::default();
        untouched.restore();
        assert!(!untouched.raw_mode && !untouched.alternate_screen);
    }
}
