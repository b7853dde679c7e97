//! Surface trait for abstracting terminal I/O.
//!
//! The [`Surface`] trait decouples the session runtime from a specific
//! terminal library. The frontend implements it over a real terminal, tests
//! implement it over a scripted event queue that records every frame.

use crate::PinEvent;

/// Exclusive drawing and input capability over a terminal.
///
/// Acquisition happens when the surface is constructed, which is why it is
/// not part of the trait: [`crate::enter_with`] takes the constructor as a
/// closure and reports its failure as [`crate::PinError::Initialization`].
///
/// Coordinates are `(column, row)` cells with `(0, 0)` at the top left.
/// Drawing is buffered; nothing is visible until [`Surface::flush`].
///
/// # Implementations
///
/// - **TUI**: crossterm raw mode and alternate screen, ratatui buffers
/// - **Tests**: ratatui `TestBackend`, or a recording fake
pub trait Surface {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Reset the draw buffer to blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Write `text` starting at `(x, y)`, one column per character.
    ///
    /// Characters that fall outside the drawable area are dropped.
    fn draw_text(&mut self, x: u16, y: u16, text: &str);

    /// Place the visible terminal cursor.
    fn set_cursor_position(&mut self, x: u16, y: u16);

    /// Commit the draw buffer to the display.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Block until the next input event.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails or is closed.
    fn poll_event(&mut self) -> Result<PinEvent, Self::Error>;

    /// Restore the terminal to the mode it was in before acquisition.
    ///
    /// Must be safe to call more than once and before any frame was flushed.
    fn release(&mut self);
}

impl<S> Surface for &mut S
where
    S: Surface + ?Sized,
{
    type Error = S::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        (**self).clear()
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        (**self).draw_text(x, y, text);
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) {
        (**self).set_cursor_position(x, y);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }

    fn poll_event(&mut self) -> Result<PinEvent, Self::Error> {
        (**self).poll_event()
    }

    fn release(&mut self) {
        (**self).release();
    }
}
