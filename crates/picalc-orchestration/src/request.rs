//! Computation requests.

use picalc_core::constants::ALL_FORMULAS;

/// Which formulas a request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaSelector {
    /// One named formula.
    Single(String),
    /// Every registered formula, in registry order.
    All,
}

impl FormulaSelector {
    /// Parse a formula name; `"all"` selects every formula.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == ALL_FORMULAS {
            Self::All
        } else {
            Self::Single(name.to_string())
        }
    }
}

/// What the driver should do with the selected formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Produce digits.
    Produce,
    /// Check digits against the reference.
    SelfTest,
}

/// A resolved computation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationRequest {
    pub selector: FormulaSelector,
    /// Number of significant digits, including the leading "3".
    pub precision: usize,
    pub mode: Mode,
}

impl ComputationRequest {
    /// Build a request, falling back to `default_formula` when no formula
    /// was named.
    #[must_use]
    pub fn new(formula: Option<&str>, default_formula: &str, precision: usize, mode: Mode) -> Self {
        Self {
            selector: FormulaSelector::parse(formula.unwrap_or(default_formula)),
            precision,
            mode,
        }
    }

    /// Produce digits with one formula.
    #[must_use]
    pub fn produce(formula: &str, precision: usize) -> Self {
        Self {
            selector: FormulaSelector::Single(formula.to_string()),
            precision,
            mode: Mode::Produce,
        }
    }

    /// Produce digits with every formula.
    #[must_use]
    pub fn produce_all(precision: usize) -> Self {
        Self {
            selector: FormulaSelector::All,
            precision,
            mode: Mode::Produce,
        }
    }

    /// Self-test the selected formulas.
    #[must_use]
    pub fn self_test(selector: FormulaSelector, precision: usize) -> Self {
        Self {
            selector,
            precision,
            mode: Mode::SelfTest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selector() {
        assert_eq!(FormulaSelector::parse("all"), FormulaSelector::All);
        assert_eq!(
            FormulaSelector::parse("bbp"),
            FormulaSelector::Single("bbp".into())
        );
    }

    #[test]
    fn default_formula_applies_when_unnamed() {
        let request = ComputationRequest::new(None, "agm", 10, Mode::Produce);
        assert_eq!(request.selector, FormulaSelector::Single("agm".into()));
        assert_eq!(request.precision, 10);
        assert_eq!(request.mode, Mode::Produce);
    }

    #[test]
    fn named_formula_wins_over_default() {
        let request = ComputationRequest::new(Some("all"), "agm", 5, Mode::SelfTest);
        assert_eq!(request.selector, FormulaSelector::All);
        assert_eq!(request.mode, Mode::SelfTest);
    }

    #[test]
    fn shorthand_constructors() {
        assert_eq!(
            ComputationRequest::produce("bbp", 3),
            ComputationRequest::new(Some("bbp"), "machin", 3, Mode::Produce)
        );
        assert_eq!(
            ComputationRequest::produce_all(3).selector,
            FormulaSelector::All
        );
        assert_eq!(
            ComputationRequest::self_test(FormulaSelector::All, 3).mode,
            Mode::SelfTest
        );
    }
}
