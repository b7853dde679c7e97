//! Terminal UI for blindpin
//!
//! A thin shell over [`blindpin_app::Runtime`] that provides terminal-specific
//! I/O. All session logic lives in the generic [`blindpin_app`] crate.
//!
//! This crate only handles terminal control, rendering and key conversion.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod terminal;

pub use blindpin_app::{KeyInput, Pin, PinEntry, PinError, PinEvent, Runtime, Surface};
pub use input::{CrosstermEvents, EventSource};
pub use terminal::{CrosstermSurface, TerminalError, TerminalSurface};

/// Run a full-screen PIN entry session on the process's terminal.
///
/// Blocks until the user submits or quits. The terminal is restored before
/// this returns.
///
/// # Errors
///
/// - [`PinError::Initialization`] if stdout is not an interactive terminal.
/// - [`PinError::Cancelled`] if the user quits.
/// - [`PinError::Surface`] if terminal I/O fails mid-session.
pub fn enter(prompt: &str) -> Result<Pin, PinError<TerminalError>> {
    blindpin_app::enter_with(CrosstermSurface::acquire, prompt)
}
