//! # picalc-core
//!
//! Core library for the PiCalc-rs digit calculator.
//! Implements fixed-point decimal arithmetic and the BBP, Machin and
//! Gauss–Legendre formulas behind a single `Formula` contract.

pub mod agm;
pub mod bbp;
pub mod constants;
pub mod decimal;
pub mod digits;
pub mod formula;
pub mod machin;
pub mod options;
pub mod registry;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_FORMULA, DEFAULT_GUARD_DIGITS, REFERENCE_DIGITS, SELF_TEST_PRECISIONS,
};
pub use decimal::{DecimalContext, FixedDecimal};
pub use digits::DigitString;
pub use formula::{Formula, PiError, PiFormula, Series, SeriesOutcome};
pub use options::Options;
pub use registry::Registry;

/// Compute the first `precision` digits of pi with Machin's formula.
///
/// This is a convenience function for simple use cases. To pick a formula
/// or tune guard digits, go through the `Registry` and `Formula` directly.
///
/// # Example
/// ```
/// assert_eq!(picalc_core::pi_digits(10).unwrap().as_str(), "3141592653");
/// assert!(picalc_core::pi_digits(0).is_err());
/// ```
pub fn pi_digits(precision: usize) -> Result<DigitString, PiError> {
    PiFormula::new(std::sync::Arc::new(machin::Machin::new())).compute(precision)
}
