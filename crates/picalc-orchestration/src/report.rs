//! Self-test reports.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// Outcome of checking one formula against the reference digits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaVerdict {
    /// Registry name of the formula.
    pub name: String,
    /// Whether every digit matched.
    pub passed: bool,
    /// Zero-based index of the first differing digit.
    pub mismatch_index: Option<usize>,
    /// Time spent computing the digits.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl FormulaVerdict {
    /// Build a verdict from a mismatch index (`None` = all digits matched).
    #[must_use]
    pub fn new(name: impl Into<String>, mismatch_index: Option<usize>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            passed: mismatch_index.is_none(),
            mismatch_index,
            elapsed,
        }
    }
}

/// Self-test results for every selected formula, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestReport {
    /// Precision the formulas were checked at.
    pub precision: usize,
    pub entries: Vec<FormulaVerdict>,
}

impl TestReport {
    /// `true` when there is at least one entry and every entry passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|v| v.passed)
    }

    /// Entries that failed.
    pub fn failures(&self) -> impl Iterator<Item = &FormulaVerdict> {
        self.entries.iter().filter(|v| !v.passed)
    }

    /// The verdict for a named formula.
    #[must_use]
    pub fn verdict(&self, name: &str) -> Option<&FormulaVerdict> {
        self.entries.iter().find(|v| v.name == name)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}
