//! Scalar types that can serve as range bounds.

use core::fmt::{Debug, Display};

use crate::rng::RandomSource;

/// Numeric scalar usable as a [`BoundedRange`](super::BoundedRange) bound.
///
/// Implemented for `f32` (float ranges) and `i32` (int ranges).
pub trait Bound: Copy + PartialOrd + Debug + Display + 'static {
    const ZERO: Self;

    /// Text between `min` and `max` when a range is displayed.
    const SEPARATOR: &'static str;

    /// `self + amount`. Integer bounds saturate instead of overflowing.
    fn offset(self, amount: Self) -> Self;

    /// `|self - other|`.
    fn distance(self, other: Self) -> Self;

    /// `numerator / denominator` as a float, without a zero guard.
    fn ratio(numerator: Self, denominator: Self) -> f32;

    /// Multiplies by a float factor. Integer bounds truncate toward zero.
    fn scale(self, factor: f32) -> Self;

    /// Divides by a float divisor. Integer bounds truncate toward zero.
    fn divide(self, divisor: f32) -> Self;

    /// Draws a uniform value between `min` and `max` (inclusive).
    fn sample<R: RandomSource + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

impl Bound for f32 {
    const ZERO: Self = 0.0;
    const SEPARATOR: &'static str = " | ";

    #[inline]
    fn offset(self, amount: Self) -> Self {
        self + amount
    }

    #[inline]
    fn distance(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn ratio(numerator: Self, denominator: Self) -> f32 {
        numerator / denominator
    }

    #[inline]
    fn scale(self, factor: f32) -> Self {
        self * factor
    }

    #[inline]
    fn divide(self, divisor: f32) -> Self {
        self / divisor
    }

    fn sample<R: RandomSource + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        rng.uniform_float(min, max)
    }
}

impl Bound for i32 {
    const ZERO: Self = 0;
    const SEPARATOR: &'static str = "/";

    #[inline]
    fn offset(self, amount: Self) -> Self {
        self.saturating_add(amount)
    }

    #[inline]
    fn distance(self, other: Self) -> Self {
        // abs_diff is u32; saturate back into the signed domain
        i32::try_from(self.abs_diff(other)).unwrap_or(i32::MAX)
    }

    #[inline]
    fn ratio(numerator: Self, denominator: Self) -> f32 {
        numerator as f32 / denominator as f32
    }

    #[inline]
    fn scale(self, factor: f32) -> Self {
        (self as f32 * factor) as i32
    }

    #[inline]
    fn divide(self, divisor: f32) -> Self {
        (self as f32 / divisor) as i32
    }

    fn sample<R: RandomSource + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        rng.uniform_int(min, max)
    }
}

/// Clamps `value` into `[lo, hi]` without panicking when `lo > hi`.
///
/// Lower bound is checked first: with inverted bounds a value below `lo`
/// becomes `lo`, a value above `hi` (and not below `lo`) becomes `hi`. NaN
/// passes through unchanged.
#[inline]
pub fn clamp<N: Bound>(value: N, lo: N, hi: N) -> N {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
