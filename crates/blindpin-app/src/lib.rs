//! Blind keypad PIN entry
//!
//! Pure state machine and generic runtime for entering a PIN on a blank 3x3
//! keypad. The device being unlocked shows a scrambled layout; the user maps
//! it onto the blank grid, and the digits are reported in canonical keypad
//! order without anything on screen revealing them.
//!
//! # Components
//!
//! - [`Keypad`] / [`Cursor`]: fixed digit layout and the highlighted cell
//! - [`PinEntry`]: input state machine (cursor moves, select, delete)
//! - [`Surface`]: trait for platform-specific terminal I/O
//! - [`Runtime`]: render-then-wait loop driving a `PinEntry` on a `Surface`
//! - [`enter_with`]: entry point running one complete session

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod entry;
mod error;
mod event;
mod input;
mod keypad;
mod pin;
pub mod render;
mod runtime;
mod surface;

pub use action::PinAction;
pub use entry::PinEntry;
pub use error::PinError;
pub use event::PinEvent;
pub use input::KeyInput;
pub use keypad::{Cursor, Direction, KEYPAD_SIZE, Keypad};
pub use pin::Pin;
pub use runtime::{Runtime, enter_with};
pub use surface::Surface;
