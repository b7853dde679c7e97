//! Input events consumed by the [`crate::PinEntry`] state machine.

use crate::KeyInput;

/// One event read from a [`crate::Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// Key press.
    Key(KeyInput),

    /// Anything that is not a key press (resize, mouse, focus, paste, key
    /// release). Always ignored.
    Other,
}

impl From<KeyInput> for PinEvent {
    fn from(key: KeyInput) -> Self {
        Self::Key(key)
    }
}
