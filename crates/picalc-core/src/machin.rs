//! Machin's formula.
//!
//!   pi = 16 * arctan(1/5) - 4 * arctan(1/239)
//!
//! Each arctangent uses the Taylor series
//! arctan(1/x) = Σ (-1)^n / ((2n+1) x^(2n+1)), summed until the power
//! x^-(2n+1) truncates to zero.

use std::sync::Arc;

use crate::decimal::{DecimalContext, FixedDecimal};
use crate::formula::{PiError, Series, SeriesOutcome};

/// Machin's arctangent formula.
pub struct Machin;

impl Machin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// arctan(1/x). `iterations` is shared across calls so the cap applies
    /// to the formula as a whole.
    fn arctan_inverse(
        &self,
        ctx: &Arc<DecimalContext>,
        x: u64,
        max_iterations: u64,
        iterations: &mut u64,
    ) -> Result<FixedDecimal, PiError> {
        let x_squared = x * x;
        let mut power = FixedDecimal::one(ctx) / x;
        let mut sum = FixedDecimal::zero(ctx);
        let mut n: u64 = 0;

        while !power.is_zero() {
            if *iterations >= max_iterations {
                return Err(PiError::Convergence {
                    formula: self.name().to_string(),
                    iterations: *iterations,
                });
            }
            let term = &power / (2 * n + 1);
            sum = if n % 2 == 0 { sum + term } else { sum - term };
            power = power / x_squared;
            n += 1;
            *iterations += 1;
        }

        Ok(sum)
    }
}

impl Default for Machin {
    fn default() -> Self {
        Self::new()
    }
}

impl Series for Machin {
    fn evaluate(
        &self,
        ctx: &Arc<DecimalContext>,
        max_iterations: u64,
    ) -> Result<SeriesOutcome, PiError> {
        let mut iterations = 0;
        let a = self.arctan_inverse(ctx, 5, max_iterations, &mut iterations)?;
        let b = self.arctan_inverse(ctx, 239, max_iterations, &mut iterations)?;

        Ok(SeriesOutcome {
            value: a * 16u64 - b * 4u64,
            iterations,
        })
    }

    /// arctan(1/5) gains log10(25) ≈ 1.4 digits per term, arctan(1/239)
    /// about 4.76; together they stay below one term per digit.
    fn iteration_bound(&self, digits: usize) -> u64 {
        digits as u64 + 16
    }

    fn name(&self) -> &str {
        "Machin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{Formula, PiFormula};

    fn formula() -> PiFormula {
        PiFormula::new(Arc::new(Machin::new()))
    }

    #[test]
    fn arctan_of_one_fifth() {
        let ctx = DecimalContext::new(20);
        let mut iterations = 0;
        let value = Machin::new()
            .arctan_inverse(&ctx, 5, u64::MAX, &mut iterations)
            .unwrap();
        // arctan(0.2) = 0.19739555984988075837...
        assert!(value.to_string().starts_with("0.197395559849880758"));
        assert!(iterations > 0);
    }

    #[test]
    fn computes_ten_digits() {
        assert_eq!(formula().compute(10).unwrap().as_str(), "3141592653");
    }

    #[test]
    fn single_digit() {
        assert_eq!(formula().compute(1).unwrap().as_str(), "3");
    }

    #[test]
    fn fifty_digits() {
        assert_eq!(
            formula().compute(50).unwrap().as_str(),
            "31415926535897932384626433832795028841971693993751"
        );
    }

    #[test]
    fn iteration_cap_spans_both_series() {
        let ctx = DecimalContext::new(50);
        let full = Machin::new().evaluate(&ctx, u64::MAX).unwrap();
        let err = Machin::new().evaluate(&ctx, full.iterations - 1).unwrap_err();
        assert_eq!(
            err,
            PiError::Convergence {
                formula: "Machin".into(),
                iterations: full.iterations - 1,
            }
        );
    }

    #[test]
    fn default_bound_suffices() {
        let series = Machin::new();
        for digits in [1, 10, 100, 1000] {
            let ctx = DecimalContext::new(digits);
            assert!(series.evaluate(&ctx, series.iteration_bound(digits)).is_ok());
        }
    }
}
