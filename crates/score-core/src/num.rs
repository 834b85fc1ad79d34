//! Numeric type abstractions for score computations.
//!
//! This module defines the [`ScoreFloat`] trait which abstracts over `f32` and `f64`
//! so transforms can be instantiated at either precision.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bounds, present only when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub trait MaybeSerde: Serialize + DeserializeOwned {}

/// Serialization bounds, present only when the `serde` feature is enabled.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(feature = "serde")]
impl<T> MaybeSerde for T where T: Serialize + DeserializeOwned {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in score calculations.
///
/// # Associated Constants
///
/// - `INFINITY` / `NEG_INFINITY` - Signed infinities
/// - `ZERO`, `ONE`, `HALF` - Small literals used by the kernels
/// - `FRAC_1_SQRT_2PI` - `1 / sqrt(2π)`, the normal density prefactor
///
/// # Example
///
/// ```rust
/// use score_core::ScoreFloat;
///
/// fn unit_peak<T: ScoreFloat>(std_dev: T) -> T {
///     T::FRAC_1_SQRT_2PI / std_dev
/// }
///
/// assert!((unit_peak(1.0f64) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
pub trait ScoreFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + MaybeSerde + core::fmt::Debug + 'static
{
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// One half.
    const HALF: Self;
    /// `1 / sqrt(2π)`.
    const FRAC_1_SQRT_2PI: Self;

    /// Convert from `f64`, rounding to the nearest representable value.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Clamp value to the range [min, max].
    ///
    /// If the value is NaN, returns NaN.
    #[must_use]
    fn clamp_value(self, min: Self, max: Self) -> Self {
        if self.is_nan() {
            return self;
        }
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

impl ScoreFloat for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const FRAC_1_SQRT_2PI: Self = 0.398_942_28;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }
}

impl ScoreFloat for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const FRAC_1_SQRT_2PI: Self = 0.398_942_280_401_432_7;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
