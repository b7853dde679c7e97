//! Session errors.
//!
//! Cancellation is an expected outcome, reported through the same channel as
//! surface failures so callers handle every way a session can end without a
//! PIN in one place.

use thiserror::Error;

/// Ways a PIN entry session can end without a PIN.
///
/// `E` is the error type of the [`crate::Surface`] driving the session.
#[derive(Debug, Error)]
pub enum PinError<E>
where
    E: std::error::Error + 'static,
{
    /// The user quit (`q` or interrupt).
    #[error("user cancelled PIN entry")]
    Cancelled,

    /// The terminal could not be taken over. Nothing was rendered.
    #[error("failed to initialize terminal: {0}")]
    Initialization(#[source] E),

    /// Drawing or reading input failed after the terminal was acquired.
    #[error("terminal error: {0}")]
    Surface(#[source] E),
}

impl<E> PinError<E>
where
    E: std::error::Error + 'static,
{
    /// `true` if the user chose to abandon entry.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
