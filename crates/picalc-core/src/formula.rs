//! Formula traits and the `PiFormula` decorator.
//!
//! `Formula` is the public trait consumed by the registry and orchestration.
//! `Series` is the internal trait implemented by algorithms: it evaluates pi
//! in a fixed-point context and knows nothing about digit strings.
//! `PiFormula` is a decorator that adds precision validation, guard digits,
//! iteration bounds and final truncation to a `DigitString`.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::decimal::{DecimalContext, FixedDecimal};
use crate::digits::DigitString;
use crate::options::Options;

/// Error type for digit computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// The requested formula is not registered.
    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    /// Precision must be at least one digit.
    #[error("invalid precision: {0} (must be at least 1)")]
    InvalidPrecision(usize),

    /// Precision plus guard digits does not fit in `usize`.
    #[error("precision {precision} with {guard_digits} guard digits is too large")]
    PrecisionTooLarge {
        /// Requested precision.
        precision: usize,
        /// Guard digits after normalization.
        guard_digits: usize,
    },

    /// Two formulas were registered under the same name.
    #[error("duplicate formula name: {0}")]
    DuplicateName(String),

    /// A formula did not reach the requested precision within its bound.
    #[error("formula {formula} did not converge within {iterations} iterations")]
    Convergence {
        /// Registry-independent formula label.
        formula: String,
        /// Iterations performed before giving up.
        iterations: u64,
    },

    /// A self-test asked for more digits than the reference holds.
    #[error("self-test precision {requested} exceeds the {available} reference digits")]
    ReferenceExhausted {
        /// Requested precision.
        requested: usize,
        /// Length of the reference digit string.
        available: usize,
    },

    /// The request cannot be served by the called operation.
    #[error("unsupported request: {0}")]
    UnsupportedRequest(String),
}

/// Public trait for pi formulas: precision in, digits out.
pub trait Formula: Send + Sync {
    /// Compute the first `precision` digits of pi with the given options.
    fn compute_with(&self, precision: usize, opts: &Options) -> Result<DigitString, PiError>;

    /// Compute the first `precision` digits of pi with default options.
    fn compute(&self, precision: usize) -> Result<DigitString, PiError> {
        self.compute_with(precision, &Options::default())
    }

    /// Human-readable name of the algorithm.
    fn name(&self) -> &str;
}

/// Value produced by a series evaluation.
#[derive(Debug, Clone)]
pub struct SeriesOutcome {
    /// Approximation of pi in the requested context.
    pub value: FixedDecimal,
    /// Number of iterations (terms or refinement steps) performed.
    pub iterations: u64,
}

/// Internal trait for algorithm implementations.
/// Wrapped by `PiFormula` which handles precision and truncation.
pub trait Series: Send + Sync {
    /// Evaluate pi in `ctx`, failing with `PiError::Convergence` once
    /// `max_iterations` is exceeded.
    fn evaluate(
        &self,
        ctx: &Arc<DecimalContext>,
        max_iterations: u64,
    ) -> Result<SeriesOutcome, PiError>;

    /// Iteration bound sufficient for `digits` fractional digits.
    fn iteration_bound(&self, digits: usize) -> u64;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `Series` with precision handling.
pub struct PiFormula {
    inner: Arc<dyn Series>,
}

impl PiFormula {
    /// Create a new `PiFormula` wrapping the given series.
    #[must_use]
    pub fn new(inner: Arc<dyn Series>) -> Self {
        Self { inner }
    }

    /// Fractional digits to carry for `precision` significant digits,
    /// or `None` on overflow.
    fn working_digits(precision: usize, guard_digits: usize) -> Option<usize> {
        precision
            .checked_add(guard_digits)?
            .checked_add(decimal_len(precision))
    }
}

impl Formula for PiFormula {
    fn compute_with(&self, precision: usize, opts: &Options) -> Result<DigitString, PiError> {
        if precision == 0 {
            return Err(PiError::InvalidPrecision(precision));
        }

        let opts = opts.clone().normalize();
        let digits = Self::working_digits(precision, opts.guard_digits).ok_or(
            PiError::PrecisionTooLarge {
                precision,
                guard_digits: opts.guard_digits,
            },
        )?;
        let bound = if opts.max_iterations == 0 {
            self.inner.iteration_bound(digits)
        } else {
            opts.max_iterations
        };

        let start = Instant::now();
        let ctx = DecimalContext::new(digits);
        let outcome = self.inner.evaluate(&ctx, bound)?;
        debug!(
            formula = self.inner.name(),
            precision,
            working_digits = digits,
            iterations = outcome.iterations,
            elapsed = ?start.elapsed(),
            "series evaluated"
        );

        let text = outcome
            .value
            .leading_digits(precision)
            .ok_or_else(|| PiError::Convergence {
                formula: self.inner.name().to_string(),
                iterations: outcome.iterations,
            })?;
        Ok(DigitString::from_digits(text))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Number of decimal digits needed to print `n`.
pub(crate) fn decimal_len(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
