//! Frame rendering.
//!
//! Paints a [`PinEntry`] onto a [`Surface`]. The keypad is drawn blank and
//! the PIN field only ever shows [`MASK_GLYPH`], one per digit: the digits
//! themselves never reach the screen.

use crate::{KEYPAD_SIZE, PinEntry, Surface};

/// Placeholder drawn for every keypad cell and every entered digit.
pub const MASK_GLYPH: char = '●';

const PROMPT_ROW: u16 = 0;
const KEYPAD_COLUMN: u16 = 3;
const KEYPAD_ROW: u16 = 2;
const PIN_ROW: u16 = 6;
const PIN_LABEL: &str = "PIN: ";
const HELP_ROW: u16 = 9;

const HELP: [&str; 5] = [
    "[Arrow keys]: move cursor",
    "[Space]:      press button under cursor",
    "[Backspace]:  delete",
    "[Enter]:      submit PIN",
    "[q]:          exit without submitting PIN",
];

/// Render one full frame and commit it.
///
/// # Errors
///
/// Returns the surface error if clearing or flushing fails.
pub fn frame<S: Surface>(surface: &mut S, entry: &PinEntry) -> Result<(), S::Error> {
    surface.clear()?;

    surface.draw_text(0, PROMPT_ROW, entry.prompt());

    let keypad_line: String = std::iter::repeat_n(MASK_GLYPH, KEYPAD_SIZE.into()).collect();
    for row in (KEYPAD_ROW..).take(KEYPAD_SIZE.into()) {
        surface.draw_text(KEYPAD_COLUMN, row, &keypad_line);
    }

    let mut pin_line = String::from(PIN_LABEL);
    pin_line.extend(std::iter::repeat_n(MASK_GLYPH, entry.digit_count()));
    surface.draw_text(0, PIN_ROW, &pin_line);

    for (row, line) in (HELP_ROW..).zip(HELP) {
        surface.draw_text(0, row, line);
    }

    let cursor = entry.cursor();
    surface.set_cursor_position(
        KEYPAD_COLUMN + u16::from(cursor.column()),
        KEYPAD_ROW + u16::from(cursor.row()),
    );

    surface.flush()
}
