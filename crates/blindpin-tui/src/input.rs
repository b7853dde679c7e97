//! Terminal input events.
//!
//! Reads crossterm events and converts them to terminal-agnostic
//! [`PinEvent`]s. Only key presses carry meaning; releases, repeats, resizes,
//! mouse, focus and paste events all become [`PinEvent::Other`].

use std::io;

use blindpin_app::{KeyInput, PinEvent};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Blocking source of terminal events.
pub trait EventSource {
    /// Block until the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails.
    fn read(&mut self) -> io::Result<Event>;
}

/// Reads events from the process's terminal via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Convert a crossterm event to a [`PinEvent`].
pub fn convert_event(event: &Event) -> PinEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            convert_key(*key).map_or(PinEvent::Other, PinEvent::Key)
        },
        _ => PinEvent::Other,
    }
}

/// Convert a crossterm key press to `KeyInput`.
fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(KeyInput::Interrupt),
        // ASCII BS, sent as Ctrl-H by terminals that map backspace to ^H
        KeyCode::Char('h') if ctrl => Some(KeyInput::Backspace),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        _ => None,
    }
}
