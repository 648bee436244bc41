//! Orchestration interfaces.

use picalc_core::digits::DigitString;

use crate::report::TestReport;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a digit string.
    fn present_digits(&self, digits: &DigitString);

    /// Present the digits produced by several formulas.
    fn present_all(&self, results: &[(String, DigitString)]);

    /// Present self-test reports, one per checked precision.
    fn present_reports(&self, reports: &[TestReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
