//! Digit computation driver: runs requests against the registry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use picalc_core::constants::REFERENCE_DIGITS;
use picalc_core::digits::DigitString;
use picalc_core::formula::{Formula, PiError};
use picalc_core::options::Options;
use picalc_core::registry::Registry;

use crate::formula_selection::get_formulas_to_run;
use crate::report::{FormulaVerdict, TestReport};
use crate::request::{ComputationRequest, FormulaSelector, Mode};

/// Result of [`Driver::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Digits from a single formula.
    Digits(DigitString),
    /// Digits from every selected formula, in selection order.
    AllDigits(Vec<(String, DigitString)>),
    /// Self-test verdicts.
    Report(TestReport),
}

/// Translates `ComputationRequest`s into digits or self-test reports.
///
/// Every call is a pure function of the request; the only shared state is
/// the borrowed, read-only registry.
pub struct Driver<'r> {
    registry: &'r Registry,
    options: Options,
}

impl<'r> Driver<'r> {
    /// Create a driver over `registry` with default options.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: Options::default(),
        }
    }

    /// Replace the computation options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options.normalize();
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compute digits with the single formula named by the request.
    pub fn compute(&self, request: &ComputationRequest) -> Result<DigitString, PiError> {
        validate_precision(request.precision)?;
        expect_mode(request, Mode::Produce)?;
        let FormulaSelector::Single(name) = &request.selector else {
            return Err(PiError::UnsupportedRequest(
                "compute needs a single formula; use compute_all for \"all\"".into(),
            ));
        };

        let formula = self.registry.get(name)?;
        let (digits, _) = self.timed_compute(name, formula.as_ref(), request.precision)?;
        Ok(digits)
    }

    /// Compute digits with every selected formula.
    pub fn compute_all(
        &self,
        request: &ComputationRequest,
    ) -> Result<Vec<(String, DigitString)>, PiError> {
        validate_precision(request.precision)?;
        expect_mode(request, Mode::Produce)?;

        get_formulas_to_run(&request.selector, self.registry)?
            .into_iter()
            .map(|(name, formula)| {
                let (digits, _) = self.timed_compute(&name, formula.as_ref(), request.precision)?;
                Ok((name, digits))
            })
            .collect()
    }

    /// Check every selected formula against the reference digits of pi.
    ///
    /// A mismatch is recorded in the report; only computation failures are
    /// returned as errors.
    pub fn self_test(&self, request: &ComputationRequest) -> Result<TestReport, PiError> {
        validate_precision(request.precision)?;
        expect_mode(request, Mode::SelfTest)?;
        if request.precision > REFERENCE_DIGITS.len() {
            return Err(PiError::ReferenceExhausted {
                requested: request.precision,
                available: REFERENCE_DIGITS.len(),
            });
        }
        let reference = &REFERENCE_DIGITS[..request.precision];

        let formulas = get_formulas_to_run(&request.selector, self.registry)?;
        let entries = formulas
            .iter()
            .map(|(name, formula)| self.check(name, formula, reference))
            .collect::<Result<Vec<_>, _>>()?;

        let report = TestReport {
            precision: request.precision,
            entries,
        };
        debug!(
            precision = report.precision,
            passed = report.passed(),
            "self-test finished"
        );
        Ok(report)
    }

    /// Dispatch on mode and selector.
    pub fn run(&self, request: &ComputationRequest) -> Result<Outcome, PiError> {
        match (request.mode, &request.selector) {
            (Mode::SelfTest, _) => self.self_test(request).map(Outcome::Report),
            (Mode::Produce, FormulaSelector::All) => {
                self.compute_all(request).map(Outcome::AllDigits)
            }
            (Mode::Produce, FormulaSelector::Single(_)) => {
                self.compute(request).map(Outcome::Digits)
            }
        }
    }

    fn check(
        &self,
        name: &str,
        formula: &Arc<dyn Formula>,
        reference: &str,
    ) -> Result<FormulaVerdict, PiError> {
        let (digits, elapsed) = self.timed_compute(name, formula.as_ref(), reference.len())?;
        let mismatch = digits.first_mismatch(reference);
        if let Some(index) = mismatch {
            debug!(formula = name, index, "digit mismatch");
        }
        Ok(FormulaVerdict::new(name, mismatch, elapsed))
    }

    fn timed_compute(
        &self,
        name: &str,
        formula: &dyn Formula,
        precision: usize,
    ) -> Result<(DigitString, Duration), PiError> {
        let start = Instant::now();
        let digits = formula.compute_with(precision, &self.options)?;
        let elapsed = start.elapsed();
        debug!(formula = name, precision, ?elapsed, "digits computed");
        Ok((digits, elapsed))
    }
}

fn validate_precision(precision: usize) -> Result<(), PiError> {
    if precision == 0 {
        return Err(PiError::InvalidPrecision(precision));
    }
    Ok(())
}

fn expect_mode(request: &ComputationRequest, mode: Mode) -> Result<(), PiError> {
    if request.mode != mode {
        return Err(PiError::UnsupportedRequest(format!(
            "expected a {mode:?} request, got {:?}",
            request.mode
        )));
    }
    Ok(())
}
