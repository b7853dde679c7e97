//! Submitted PIN value.

use std::fmt;

/// Digits submitted by the user, in canonical keypad order.
///
/// The value is opaque: it only means something to the device showing the
/// scrambled layout. `Debug` is redacted so the digits never end up in logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub(crate) fn new(digits: String) -> Self {
        Self(digits)
    }

    /// Digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the PIN, returning the digit string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the user submitted without entering any digit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin").field("len", &self.0.len()).finish_non_exhaustive()
    }
}

impl PartialEq<str> for Pin {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Pin {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
