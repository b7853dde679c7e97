//! Instructions produced by the [`crate::PinEntry`] state machine.

/// Outcome of handling a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinAction {
    /// Keep the session running and render the next frame.
    Render,

    /// End the session and return the accumulated PIN.
    Submit,

    /// End the session without a PIN.
    Cancel,
}
