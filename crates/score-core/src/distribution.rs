//! Normal (Gaussian) distribution.
//!
//! Used as a similarity kernel: the density is evaluated at a measurement and
//! compared against the density at the mean.

use crate::num::ScoreFloat;

/// A normal distribution with precomputed density normalization.
///
/// `pdf(x) = (1 / (σ·√(2π))) · exp(−(x − μ)² / (2σ²))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<T: ScoreFloat> {
    mean: T,
    std_dev: T,
    peak: T,
}

impl<T: ScoreFloat> Normal<T> {
    /// Create a distribution.
    ///
    /// Returns `None` unless `mean` is finite and `std_dev` is finite and
    /// positive. For subnormal `std_dev` the peak density overflows to `+inf`;
    /// [`relative_density`](Self::relative_density) stays exact.
    #[must_use]
    pub fn new(mean: T, std_dev: T) -> Option<Self> {
        if !mean.is_valid() || !std_dev.is_valid() || std_dev <= T::ZERO {
            return None;
        }
        let peak = T::FRAC_1_SQRT_2PI / std_dev;
        Some(Self {
            mean,
            std_dev,
            peak,
        })
    }

    /// The mean (location).
    #[must_use]
    pub fn mean(&self) -> T {
        self.mean
    }

    /// The standard deviation (scale).
    #[must_use]
    pub fn std_dev(&self) -> T {
        self.std_dev
    }

    /// Distance from the mean in units of standard deviation.
    #[inline]
    #[must_use]
    pub fn standardize(&self, x: T) -> T {
        (x - self.mean) / self.std_dev
    }

    /// Density at `x` divided by the peak density: `exp(−z²/2)`.
    ///
    /// 1 at the mean, zero at `±inf`, NaN for NaN input.
    #[inline]
    #[must_use]
    pub fn relative_density(&self, x: T) -> T {
        let z = self.standardize(x);
        (-(z * z) * T::HALF).exp()
    }

    /// Probability density at `x`.
    ///
    /// Zero at `±inf`, NaN for NaN input.
    #[inline]
    #[must_use]
    pub fn pdf(&self, x: T) -> T {
        let relative = self.relative_density(x);
        if relative == T::ZERO {
            return relative;
        }
        self.peak * relative
    }

    /// The maximum of the density, attained at the mean.
    #[inline]
    #[must_use]
    pub fn peak_density(&self) -> T {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_scale() {
        assert!(Normal::new(0.0f64, 0.0).is_none());
        assert!(Normal::new(0.0f64, -1.0).is_none());
        assert!(Normal::new(0.0f64, f64::NAN).is_none());
        assert!(Normal::new(0.0f64, f64::INFINITY).is_none());
        assert!(Normal::new(f64::NAN, 1.0).is_none());
    }

    #[test]
    fn test_subnormal_scale() {
        let n = Normal::new(0.0f64, 1e-320).unwrap();

        assert_eq!(n.peak_density(), f64::INFINITY);
        assert_eq!(n.relative_density(0.0), 1.0);
        assert_eq!(n.relative_density(1e-320), (-0.5f64).exp());
        assert_eq!(n.relative_density(1.0), 0.0);
        assert_eq!(n.pdf(1.0), 0.0);
    }

    #[test]
    fn test_standard_normal_density() {
        let n = Normal::new(0.0f64, 1.0).unwrap();

        assert_eq!(n.pdf(0.0), n.peak_density());
        assert!((n.peak_density() - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((n.pdf(1.0) - 0.241_970_724_519_143_37).abs() < 1e-15);
        assert!((n.pdf(-2.0) - 0.053_990_966_513_188_06).abs() < 1e-15);
    }

    #[test]
    fn test_scaled_density() {
        let n = Normal::new(50.0f64, 10.0).unwrap();

        assert_eq!(n.mean(), 50.0);
        assert_eq!(n.std_dev(), 10.0);
        assert_eq!(n.standardize(70.0), 2.0);
        assert!((n.peak_density() - 0.039_894_228_040_143_27).abs() < 1e-16);
    }

    #[test]
    fn test_non_finite_inputs() {
        let n = Normal::new(0.0f64, 1.0).unwrap();

        assert_eq!(n.pdf(f64::INFINITY), 0.0);
        assert_eq!(n.pdf(f64::NEG_INFINITY), 0.0);
        assert!(n.pdf(f64::NAN).is_nan());
        assert_eq!(n.relative_density(f64::INFINITY), 0.0);
        assert!(n.relative_density(f64::NAN).is_nan());
    }
}
