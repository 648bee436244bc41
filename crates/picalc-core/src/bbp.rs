//! Bailey–Borwein–Plouffe formula.
//!
//!   pi = Σ 16^-k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))
//!
//! The weight 16^-k is carried as a running fixed-point quotient, so each
//! term costs four single-word divisions. Repeated truncating division by 16
//! yields exactly floor(one / 16^k), and once it reaches zero the remaining
//! tail is below one unit in the last carried place.

use std::sync::Arc;

use crate::decimal::{DecimalContext, FixedDecimal};
use crate::formula::{PiError, Series, SeriesOutcome};

/// BBP series evaluated term by term.
pub struct BaileyBorweinPlouffe;

impl BaileyBorweinPlouffe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The k-th term, given `weight` = 16^-k.
    fn term(weight: &FixedDecimal, k: u64) -> FixedDecimal {
        let base = 8 * k;
        weight * 4u64 / (base + 1) - weight * 2u64 / (base + 4) - weight / (base + 5)
            - weight / (base + 6)
    }
}

impl Default for BaileyBorweinPlouffe {
    fn default() -> Self {
        Self::new()
    }
}

impl Series for BaileyBorweinPlouffe {
    fn evaluate(
        &self,
        ctx: &Arc<DecimalContext>,
        max_iterations: u64,
    ) -> Result<SeriesOutcome, PiError> {
        let mut weight = FixedDecimal::one(ctx);
        let mut sum = FixedDecimal::zero(ctx);
        let mut k: u64 = 0;

        while !weight.is_zero() {
            if k >= max_iterations {
                return Err(PiError::Convergence {
                    formula: self.name().to_string(),
                    iterations: k,
                });
            }
            sum = sum + Self::term(&weight, k);
            weight = weight / 16u64;
            k += 1;
        }

        Ok(SeriesOutcome {
            value: sum,
            iterations: k,
        })
    }

    /// One term per log10(16) ≈ 1.204 digits.
    fn iteration_bound(&self, digits: usize) -> u64 {
        digits as u64 * 5 / 6 + 16
    }

    fn name(&self) -> &str {
        "Bailey-Borwein-Plouffe"
    }
}
