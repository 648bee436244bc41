//! Gauss–Legendre arithmetic-geometric mean iteration.
//!
//!   a0 = 1, b0 = 1/sqrt(2), t0 = 1/4, p0 = 1
//!   a' = (a + b) / 2,  b' = sqrt(a b),  t' = t - p (a - a')^2,  p' = 2p
//!   pi ≈ (a + b)^2 / (4t)
//!
//! Converges quadratically; iteration stops once two successive estimates
//! agree to within a few units in the last carried place.

use std::sync::Arc;

use crate::decimal::{DecimalContext, FixedDecimal};
use crate::formula::{PiError, Series, SeriesOutcome};

/// Successive estimates closer than this many ulps count as converged.
const CONVERGENCE_ULPS: u64 = 16;

/// Gauss–Legendre AGM iteration.
pub struct GaussLegendre;

impl GaussLegendre {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn diverged(&self, iterations: u64) -> PiError {
        PiError::Convergence {
            formula: self.name().to_string(),
            iterations,
        }
    }
}

impl Default for GaussLegendre {
    fn default() -> Self {
        Self::new()
    }
}

impl Series for GaussLegendre {
    fn evaluate(
        &self,
        ctx: &Arc<DecimalContext>,
        max_iterations: u64,
    ) -> Result<SeriesOutcome, PiError> {
        let mut a = FixedDecimal::one(ctx);
        let mut b = FixedDecimal::ratio(ctx, 1, 2)
            .sqrt()
            .ok_or_else(|| self.diverged(0))?;
        let mut t = FixedDecimal::ratio(ctx, 1, 4);
        let mut p = FixedDecimal::one(ctx);
        let mut previous: Option<FixedDecimal> = None;
        let mut iterations: u64 = 0;

        loop {
            if iterations >= max_iterations {
                return Err(self.diverged(iterations));
            }

            let next_a = (&a + &b) / 2u64;
            b = (&a * &b).sqrt().ok_or_else(|| self.diverged(iterations))?;
            let delta = &a - &next_a;
            t = &t - &(&p * &(&delta * &delta));
            p = p * 2u64;
            a = next_a;
            iterations += 1;

            if t.is_zero() || t.is_negative() {
                return Err(self.diverged(iterations));
            }
            let sum = &a + &b;
            let estimate = &(&sum * &sum) / &(&t * 4u64);

            if previous
                .as_ref()
                .is_some_and(|prev| prev.is_within_ulps(&estimate, CONVERGENCE_ULPS))
            {
                return Ok(SeriesOutcome {
                    value: estimate,
                    iterations,
                });
            }
            previous = Some(estimate);
        }
    }

    /// Correct digits double per step.
    fn iteration_bound(&self, digits: usize) -> u64 {
        u64::from(digits.max(2).ilog2()) + 8
    }

    fn name(&self) -> &str {
        "Gauss-Legendre"
    }
}
