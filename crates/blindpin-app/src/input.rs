//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the entry state machine from terminal libraries (crossterm,
/// termion, etc.) so sessions can be driven by scripted input in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character. Space selects, `q` quits.
    Char(char),
    /// Enter/Return key (submit).
    Enter,
    /// Backspace key, either the BS or the DEL variant (delete last digit).
    Backspace,
    /// Escape key.
    Esc,
    /// Interrupt chord, usually Ctrl-C (cancel).
    Interrupt,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
}
