//! Signed fixed-point decimal arithmetic.
//!
//! A `FixedDecimal` is an integer mantissa `raw` interpreted as
//! `raw / 10^digits`, where `digits` comes from a shared [`DecimalContext`].
//! Every operation truncates toward zero, so one operation costs at most
//! one unit in the last place (ulp). Operands must share a context.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Number of fractional digits shared by a family of `FixedDecimal` values.
#[derive(Debug, PartialEq, Eq)]
pub struct DecimalContext {
    digits: usize,
    scale: BigInt,
}

impl DecimalContext {
    /// Create a context carrying `digits` fractional decimal digits.
    #[must_use]
    pub fn new(digits: usize) -> Arc<Self> {
        Arc::new(Self {
            digits,
            scale: num_traits::pow(BigInt::from(10u32), digits),
        })
    }

    /// Number of fractional digits.
    #[must_use]
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// `10^digits`, the raw representation of one.
    #[must_use]
    pub fn scale(&self) -> &BigInt {
        &self.scale
    }
}

/// A signed fixed-point decimal number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDecimal {
    raw: BigInt,
    ctx: Arc<DecimalContext>,
}

impl FixedDecimal {
    /// Build a value from its raw mantissa.
    #[must_use]
    pub fn from_raw(ctx: &Arc<DecimalContext>, raw: BigInt) -> Self {
        Self {
            raw,
            ctx: Arc::clone(ctx),
        }
    }

    /// Zero.
    #[must_use]
    pub fn zero(ctx: &Arc<DecimalContext>) -> Self {
        Self::from_raw(ctx, BigInt::zero())
    }

    /// One.
    #[must_use]
    pub fn one(ctx: &Arc<DecimalContext>) -> Self {
        Self::from_raw(ctx, ctx.scale.clone())
    }

    /// An exact integer value.
    #[must_use]
    pub fn from_int(ctx: &Arc<DecimalContext>, value: i64) -> Self {
        Self::from_raw(ctx, &ctx.scale * value)
    }

    /// `numerator / denominator`, truncated.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn ratio(ctx: &Arc<DecimalContext>, numerator: i64, denominator: u64) -> Self {
        Self::from_raw(ctx, &ctx.scale * numerator / denominator)
    }

    /// The raw mantissa (value times `10^digits`).
    #[must_use]
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// The context this value belongs to.
    #[must_use]
    pub fn context(&self) -> &Arc<DecimalContext> {
        &self.ctx
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_raw(&self.ctx, self.raw.abs())
    }

    /// Square root, truncated. `None` for negative values.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        if self.raw.is_negative() {
            return None;
        }
        // sqrt(raw / S) * S == sqrt(raw * S)
        Some(Self::from_raw(&self.ctx, (&self.raw * &self.ctx.scale).sqrt()))
    }

    /// Whether `self` and `other` differ by at most `ulps` units in the last place.
    #[must_use]
    pub fn is_within_ulps(&self, other: &Self, ulps: u64) -> bool {
        self.check_context(other);
        (&self.raw - &other.raw).abs() <= BigInt::from(ulps)
    }

    /// The first `count` significant digits of the value, truncated, without
    /// sign or decimal point.
    ///
    /// Returns `None` when the value is not positive or carries fewer than
    /// `count` significant digits.
    #[must_use]
    pub fn leading_digits(&self, count: usize) -> Option<String> {
        if !self.raw.is_positive() {
            return None;
        }
        let mut text = self.raw.to_string();
        if text.len() < count {
            return None;
        }
        text.truncate(count);
        Some(text)
    }

    fn check_context(&self, other: &Self) {
        debug_assert!(
            Arc::ptr_eq(&self.ctx, &other.ctx) || self.ctx == other.ctx,
            "fixed-point operands use different contexts ({} vs {} digits)",
            self.ctx.digits,
            other.ctx.digits
        );
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.ctx.digits;
        let magnitude = self.raw.abs().to_string();
        let padded = if magnitude.len() <= digits {
            format!("{}{magnitude}", "0".repeat(digits + 1 - magnitude.len()))
        } else {
            magnitude
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - digits);
        if self.raw.is_negative() {
            f.write_str("-")?;
        }
        if digits == 0 {
            write!(f, "{int_part}")
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

impl Add for &FixedDecimal {
    type Output = FixedDecimal;

    fn add(self, rhs: &FixedDecimal) -> FixedDecimal {
        self.check_context(rhs);
        FixedDecimal::from_raw(&self.ctx, &self.raw + &rhs.raw)
    }
}

impl Sub for &FixedDecimal {
    type Output = FixedDecimal;

    fn sub(self, rhs: &FixedDecimal) -> FixedDecimal {
        self.check_context(rhs);
        FixedDecimal::from_raw(&self.ctx, &self.raw - &rhs.raw)
    }
}

impl Mul for &FixedDecimal {
    type Output = FixedDecimal;

    fn mul(self, rhs: &FixedDecimal) -> FixedDecimal {
        self.check_context(rhs);
        FixedDecimal::from_raw(&self.ctx, &self.raw * &rhs.raw / &self.ctx.scale)
    }
}

impl Div for &FixedDecimal {
    type Output = FixedDecimal;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &FixedDecimal) -> FixedDecimal {
        self.check_context(rhs);
        FixedDecimal::from_raw(&self.ctx, &self.raw * &self.ctx.scale / &rhs.raw)
    }
}

impl Mul<u64> for &FixedDecimal {
    type Output = FixedDecimal;

    fn mul(self, rhs: u64) -> FixedDecimal {
        FixedDecimal::from_raw(&self.ctx, &self.raw * rhs)
    }
}

impl Div<u64> for &FixedDecimal {
    type Output = FixedDecimal;

    fn div(self, rhs: u64) -> FixedDecimal {
        FixedDecimal::from_raw(&self.ctx, &self.raw / rhs)
    }
}

impl Neg for &FixedDecimal {
    type Output = FixedDecimal;

    fn neg(self) -> FixedDecimal {
        FixedDecimal::from_raw(&self.ctx, -&self.raw)
    }
}

macro_rules! forward_owned_binop {
    ($($imp:ident :: $method:ident),* $(,)?) => {$(
        impl $imp for FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: FixedDecimal) -> FixedDecimal {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&FixedDecimal> for FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: &FixedDecimal) -> FixedDecimal {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<u64> for FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: u64) -> FixedDecimal {
                $imp::$method(&self, rhs)
            }
        }
    )*};
}

forward_owned_binop!(Mul::mul, Div::div);

impl Add for FixedDecimal {
    type Output = FixedDecimal;

    fn add(self, rhs: FixedDecimal) -> FixedDecimal {
        &self + &rhs
    }
}

impl Add<&FixedDecimal> for FixedDecimal {
    type Output = FixedDecimal;

    fn add(self, rhs: &FixedDecimal) -> FixedDecimal {
        &self + rhs
    }
}

impl Sub for FixedDecimal {
    type Output = FixedDecimal;

    fn sub(self, rhs: FixedDecimal) -> FixedDecimal {
        &self - &rhs
    }
}

impl Sub<&FixedDecimal> for FixedDecimal {
    type Output = FixedDecimal;

    fn sub(self, rhs: &FixedDecimal) -> FixedDecimal {
        &self - rhs
    }
}

impl Neg for FixedDecimal {
    type Output = FixedDecimal;

    fn neg(self) -> FixedDecimal {
        -&self
    }
}
