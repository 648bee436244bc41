//! The `DigitString` result type.

use std::fmt;

use serde::Serialize;

/// Decimal digits of pi starting with the integer part "3", without a
/// decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DigitString(String);

impl DigitString {
    /// Wrap a string of ASCII decimal digits.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `digits` contains anything but ASCII digits.
    #[must_use]
    pub fn from_digits(digits: impl Into<String>) -> Self {
        let digits = digits.into();
        debug_assert!(
            digits.bytes().all(|b| b.is_ascii_digit()),
            "digit string contains non-digit characters"
        );
        Self(digits)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based index of the first position where `self` and `expected`
    /// differ, or `None` when they are identical.
    ///
    /// If one is a strict prefix of the other, the index is the length of
    /// the shorter one.
    #[must_use]
    pub fn first_mismatch(&self, expected: &str) -> Option<usize> {
        let (actual, expected) = (self.0.as_bytes(), expected.as_bytes());
        actual
            .iter()
            .zip(expected)
            .position(|(a, e)| a != e)
            .or_else(|| (actual.len() != expected.len()).then(|| actual.len().min(expected.len())))
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_emptiness() {
        let d = DigitString::from_digits("31415");
        assert_eq!(d.len(), 5);
        assert!(!d.is_empty());
    }

    #[test]
    fn first_mismatch_identical() {
        assert_eq!(DigitString::from_digits("31415").first_mismatch("31415"), None);
    }

    #[test]
    fn first_mismatch_position() {
        assert_eq!(
            DigitString::from_digits("314150").first_mismatch("314159"),
            Some(5)
        );
        assert_eq!(DigitString::from_digits("41415").first_mismatch("31415"), Some(0));
    }

    #[test]
    fn first_mismatch_length_difference() {
        assert_eq!(DigitString::from_digits("314").first_mismatch("31415"), Some(3));
        assert_eq!(DigitString::from_digits("31415").first_mismatch("314"), Some(3));
    }

    #[test]
    fn display_and_conversions() {
        let d = DigitString::from_digits("3141");
        assert_eq!(d.to_string(), "3141");
        assert_eq!(d.as_ref(), "3141");
        assert_eq!(d.into_string(), "3141");
    }
}
