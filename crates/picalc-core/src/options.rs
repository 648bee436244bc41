//! Computation options.

use crate::constants::DEFAULT_GUARD_DIGITS;

/// Options for digit computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Guard digits carried beyond the requested precision
    /// (in addition to the length of the precision itself).
    /// Values below `DEFAULT_GUARD_DIGITS` are raised to it.
    pub guard_digits: usize,
    /// Iteration cap for every formula (0 = the formula's own bound).
    pub max_iterations: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            guard_digits: DEFAULT_GUARD_DIGITS,
            max_iterations: 0,
        }
    }
}

impl Options {
    /// Normalize options: the guard never drops below `DEFAULT_GUARD_DIGITS`,
    /// which also covers zero meaning "default".
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.guard_digits = self.guard_digits.max(DEFAULT_GUARD_DIGITS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.guard_digits, DEFAULT_GUARD_DIGITS);
        assert_eq!(opts.max_iterations, 0);
    }

    #[test]
    fn normalize_zero_guard() {
        let opts = Options {
            guard_digits: 0,
            max_iterations: 5,
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.guard_digits, DEFAULT_GUARD_DIGITS);
        assert_eq!(normalized.max_iterations, 5);
    }

    #[test]
    fn normalize_raises_small_guard() {
        for guard_digits in 1..DEFAULT_GUARD_DIGITS {
            let opts = Options {
                guard_digits,
                ..Default::default()
            };
            assert_eq!(opts.normalize().guard_digits, DEFAULT_GUARD_DIGITS);
        }
    }

    #[test]
    fn normalize_keeps_explicit_guard() {
        let opts = Options {
            guard_digits: 25,
            ..Default::default()
        };
        assert_eq!(opts.normalize().guard_digits, 25);
    }
}
