//! PIN entry state machine.
//!
//! This module defines [`PinEntry`], which holds the interactive state of one
//! session completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::PinEvent`] inputs and
//! produces a [`crate::PinAction`] for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks the highlighted keypad cell.
//! - Accumulates selected digits, with delete of the last one.
//! - Decides when the session is submitted or cancelled.

use std::fmt;

use crate::{Cursor, Direction, KeyInput, Keypad, Pin, PinAction, PinEvent};

/// Character that selects the cell under the cursor.
const SELECT_CHAR: char = ' ';

/// Character that cancels the session.
const QUIT_CHAR: char = 'q';

/// State of a single PIN entry session.
///
/// Created fresh for every session and dropped when it ends, so nothing
/// carries over between sessions. `Debug` reports only the digit count.
#[derive(Clone)]
pub struct PinEntry {
    /// Prompt shown above the keypad.
    prompt: String,
    /// Highlighted keypad cell.
    cursor: Cursor,
    /// Selected digits, in canonical keypad order.
    digits: String,
}

impl PinEntry {
    /// Create a session with the cursor on the centre cell.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_cursor(prompt, Cursor::CENTER)
    }

    /// Create a session with the cursor on `cursor`.
    pub fn with_cursor(prompt: impl Into<String>, cursor: Cursor) -> Self {
        Self { prompt: prompt.into(), cursor, digits: String::new() }
    }

    /// Process an event and return the resulting action.
    pub fn handle(&mut self, event: PinEvent) -> PinAction {
        let PinEvent::Key(key) = event else {
            return PinAction::Render;
        };

        match key {
            KeyInput::Char(QUIT_CHAR) | KeyInput::Interrupt => PinAction::Cancel,
            KeyInput::Char(SELECT_CHAR) => {
                self.select();
                PinAction::Render
            },
            KeyInput::Up => self.step(Direction::Up),
            KeyInput::Down => self.step(Direction::Down),
            KeyInput::Left => self.step(Direction::Left),
            KeyInput::Right => self.step(Direction::Right),
            KeyInput::Backspace => {
                self.delete();
                PinAction::Render
            },
            KeyInput::Enter => PinAction::Submit,
            KeyInput::Char(_) | KeyInput::Esc => PinAction::Render,
        }
    }

    /// Move the cursor one cell in `direction`, stopping at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction);
    }

    fn step(&mut self, direction: Direction) -> PinAction {
        self.move_cursor(direction);
        PinAction::Render
    }

    /// Append the digit under the cursor.
    pub fn select(&mut self) {
        self.digits.push(Keypad::digit(self.cursor));
    }

    /// Remove the last digit. No-op if nothing was entered.
    pub fn delete(&mut self) {
        self.digits.pop();
    }

    /// Take the accumulated digits, leaving the entry empty.
    pub fn take_pin(&mut self) -> Pin {
        Pin::new(std::mem::take(&mut self.digits))
    }

    /// Prompt shown above the keypad.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Highlighted keypad cell.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of digits entered so far.
    pub fn digit_count(&self) -> usize {
        self.digits.chars().count()
    }
}

impl fmt::Debug for PinEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinEntry")
            .field("prompt", &self.prompt)
            .field("cursor", &self.cursor)
            .field("digit_count", &self.digit_count())
            .finish()
    }
}
