//! Session runtime.
//!
//! The Runtime drives one PIN entry session, coordinating between:
//! - [`PinEntry`]: input state machine
//! - [`Surface`]: terminal drawing and input
//!
//! Each cycle renders a full frame, blocks on [`Surface::poll_event`] (the
//! only suspension point) and applies exactly one transition.

use crate::{Pin, PinAction, PinEntry, PinError, Surface, render};

/// Runtime that owns a surface and the state of one session.
///
/// # Type Parameters
///
/// - `S`: Terminal surface, already acquired
pub struct Runtime<S>
where
    S: Surface,
{
    surface: S,
    entry: PinEntry,
}

impl<S> Runtime<S>
where
    S: Surface,
{
    /// Create a runtime over an acquired surface.
    pub fn new(surface: S, entry: PinEntry) -> Self {
        Self { surface, entry }
    }

    /// Run the session to completion.
    ///
    /// The surface is released exactly once before returning, whichever way
    /// the session ends.
    ///
    /// # Errors
    ///
    /// - [`PinError::Cancelled`] if the user quits.
    /// - [`PinError::Surface`] if drawing or reading input fails.
    pub fn run(mut self) -> Result<Pin, PinError<S::Error>> {
        let outcome = self.event_loop();
        self.surface.release();
        tracing::debug!("terminal surface released");

        match &outcome {
            Ok(pin) => tracing::info!(digits = pin.len(), "PIN submitted"),
            Err(PinError::Cancelled) => tracing::info!("PIN entry cancelled"),
            Err(e) => tracing::warn!("PIN entry aborted: {e}"),
        }

        outcome
    }

    fn event_loop(&mut self) -> Result<Pin, PinError<S::Error>> {
        loop {
            render::frame(&mut self.surface, &self.entry).map_err(PinError::Surface)?;

            let event = self.surface.poll_event().map_err(PinError::Surface)?;
            match self.entry.handle(event) {
                PinAction::Render => {},
                PinAction::Submit => return Ok(self.entry.take_pin()),
                PinAction::Cancel => return Err(PinError::Cancelled),
            }
        }
    }
}

/// Run a PIN entry session on the surface returned by `acquire`.
///
/// The session starts with the cursor on the centre cell and `prompt` shown
/// verbatim on the first line.
///
/// # Errors
///
/// - [`PinError::Initialization`] if `acquire` fails. Nothing is rendered and
///   there is nothing to release.
/// - [`PinError::Cancelled`] if the user quits.
/// - [`PinError::Surface`] if the terminal fails mid-session.
pub fn enter_with<S, A>(acquire: A, prompt: &str) -> Result<Pin, PinError<S::Error>>
where
    S: Surface,
    A: FnOnce() -> Result<S, S::Error>,
{
    let surface = acquire().map_err(PinError::Initialization)?;
    tracing::debug!("terminal surface acquired");

    Runtime::new(surface, PinEntry::new(prompt)).run()
}
