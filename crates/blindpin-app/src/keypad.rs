//! Keypad layout and cursor.
//!
//! The [`Keypad`] is the canonical digit layout used when reporting a PIN. It
//! is never shown to the user: the screen only displays blank cells, and the
//! user maps them onto whatever scrambled layout their device is showing.
//!
//! A [`Cursor`] addresses one keypad cell. It can only be created or moved
//! through clamping operations, so an out-of-range cell is unrepresentable.

/// Number of rows and columns in the keypad.
pub const KEYPAD_SIZE: u8 = 3;

const LAST_INDEX: i16 = KEYPAD_SIZE as i16 - 1;

/// Canonical 3x3 digit layout, row-major, top row first.
///
/// Matches a numeric keypad: `7 8 9` on top, `1 2 3` at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypad;

impl Keypad {
    /// Digits by `[row][column]`.
    pub const LAYOUT: [[char; KEYPAD_SIZE as usize]; KEYPAD_SIZE as usize] =
        [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']];

    /// Digit at the cell addressed by `cursor`.
    pub fn digit(cursor: Cursor) -> char {
        Self::LAYOUT[usize::from(cursor.row)][usize::from(cursor.column)]
    }

    /// Whether `c` is one of the keypad digits.
    pub fn contains(c: char) -> bool {
        Self::LAYOUT.iter().flatten().any(|&digit| digit == c)
    }
}

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row towards the top.
    Up,
    /// One row towards the bottom.
    Down,
    /// One column to the left.
    Left,
    /// One column to the right.
    Right,
}

impl Direction {
    /// Row and column delta of this step.
    fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Highlighted keypad cell.
///
/// Both coordinates are always in `0..KEYPAD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    row: u8,
    column: u8,
}

impl Cursor {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Centre cell, where a session starts by default.
    pub const CENTER: Self = Self { row: 1, column: 1 };

    /// Cursor at `(row, column)`, clamped onto the keypad.
    pub fn new(row: u8, column: u8) -> Self {
        Self::clamped(i16::from(row), i16::from(column))
    }

    /// Row index, `0` is the top row.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index, `0` is the left column.
    pub fn column(self) -> u8 {
        self.column
    }

    /// Cursor after one step in `direction`.
    ///
    /// Both axes are clamped after every step, including the one that did
    /// not change.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.delta();
        Self::clamped(i16::from(self.row) + d_row, i16::from(self.column) + d_column)
    }

    fn clamped(row: i16, column: i16) -> Self {
        Self { row: row.clamp(0, LAST_INDEX) as u8, column: column.clamp(0, LAST_INDEX) as u8 }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_maps_to_its_fixed_digit() {
        let expected = [
            ((0, 0), '7'),
            ((0, 1), '8'),
            ((0, 2), '9'),
            ((1, 0), '4'),
            ((1, 1), '5'),
            ((1, 2), '6'),
            ((2, 0), '1'),
            ((2, 1), '2'),
            ((2, 2), '3'),
        ];

        for ((row, column), digit) in expected {
            assert_eq!(Keypad::digit(Cursor::new(row, column)), digit);
        }
    }

    #[test]
    fn new_clamps_out_of_range_coordinates() {
        let cursor = Cursor::new(7, 200);
        assert_eq!((cursor.row(), cursor.column()), (2, 2));
    }

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Cursor::ORIGIN.step(Direction::Up), Cursor::ORIGIN);
        assert_eq!(Cursor::ORIGIN.step(Direction::Left), Cursor::ORIGIN);

        let corner = Cursor::new(2, 2);
        assert_eq!(corner.step(Direction::Down), corner);
        assert_eq!(corner.step(Direction::Right), corner);
    }

    #[test]
    fn step_moves_one_axis() {
        let cursor = Cursor::CENTER;
        assert_eq!(cursor.step(Direction::Up), Cursor::new(0, 1));
        assert_eq!(cursor.step(Direction::Down), Cursor::new(2, 1));
        assert_eq!(cursor.step(Direction::Left), Cursor::new(1, 0));
        assert_eq!(cursor.step(Direction::Right), Cursor::new(1, 2));
    }

    #[test]
    fn contains_only_keypad_digits() {
        assert!(('1'..='9').all(Keypad::contains));
        assert!(!Keypad::contains('0'));
        assert!(!Keypad::contains(' '));
        assert!(!Keypad::contains('q'));
    }
}
