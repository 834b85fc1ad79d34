//! Gaussian Normalization Transform.
//!
//! Scores a measurement by how close it is to an ideal `center`, using the
//! normal density as the similarity kernel:
//!
//! ```text
//! score(v) = clamp(pdf(v) / pdf(center), 0, 1) = exp(−(v − center)² / (2·std_dev²))
//! ```
//!
//! # Non-finite Input
//!
//! - NaN propagates: `score(NaN)` is NaN.
//! - `±inf` is infinitely far from any center and scores exactly 0.

use score_core::{
    distribution::Normal,
    error::{TransformError, TransformResult},
    num::ScoreFloat,
    params::ParameterRecord,
    traits::{Transform, TransformParameters, TransformVariant},
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag the Gaussian transform is registered under.
pub const GAUSSIAN_TAG: &str = "gaussian";

/// Field names accepted in a Gaussian parameter record.
const GAUSSIAN_FIELDS: [&str; 2] = ["center", "std_dev"];

/// Parameters for [`GaussianNormalization`].
///
/// Deserializes from `{ "type": "gaussian", "center": 50.0, "std_dev": 10.0 }`.
/// Every way of obtaining a value (`new`, `from_record`, deserialization)
/// validates the fields and rejects unknown ones; the `type` tag is checked
/// against the variant when the transform is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "T: ScoreFloat", try_from = "RawGaussianParameters<T>")
)]
pub struct GaussianParameters<T: ScoreFloat> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    /// The value receiving the maximum score.
    center: T,
    /// Width of the bell curve; must be finite and > 0.
    std_dev: T,
}

/// Unchecked wire form of [`GaussianParameters`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound = "T: ScoreFloat", deny_unknown_fields)]
struct RawGaussianParameters<T: ScoreFloat> {
    #[serde(rename = "type")]
    kind: String,
    center: T,
    std_dev: T,
}

#[cfg(feature = "serde")]
impl<T: ScoreFloat> TryFrom<RawGaussianParameters<T>> for GaussianParameters<T> {
    type Error = TransformError;

    fn try_from(raw: RawGaussianParameters<T>) -> TransformResult<Self> {
        let params = Self {
            kind: raw.kind,
            center: raw.center,
            std_dev: raw.std_dev,
        };
        params.validate()?;
        Ok(params)
    }
}

impl<T: ScoreFloat> GaussianParameters<T> {
    /// Create validated parameters tagged for [`GaussianNormalization`].
    ///
    /// Any finite `std_dev > 0` is accepted, subnormal values included.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if `center` is not finite or
    /// `std_dev` is not a finite value > 0.
    pub fn new(center: T, std_dev: T) -> TransformResult<Self> {
        let params = Self {
            kind: GAUSSIAN_TAG.to_string(),
            center,
            std_dev,
        };
        params.validate()?;
        Ok(params)
    }

    /// The value receiving the maximum score.
    #[must_use]
    pub fn center(&self) -> T {
        self.center
    }

    /// Width of the bell curve.
    #[must_use]
    pub fn std_dev(&self) -> T {
        self.std_dev
    }
}

/// Read `name` from `record`, rejecting values that do not survive conversion
/// to `T` (overflow to infinity, or a non-zero value flushed to zero).
fn narrow_field<T: ScoreFloat>(record: &ParameterRecord, name: &str) -> TransformResult<T> {
    let raw = record.require(GAUSSIAN_TAG, name)?;
    let value = T::from_f64_lossy(raw);
    let overflowed = raw.is_finite() && !value.is_valid();
    let flushed = raw != 0.0 && value == T::ZERO;
    if overflowed || flushed {
        return Err(TransformError::invalid(
            GAUSSIAN_TAG,
            format!("{name} {raw:e} is out of range for {}", core::any::type_name::<T>()),
        ));
    }
    Ok(value)
}

impl<T: ScoreFloat> TransformParameters for GaussianParameters<T> {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn from_record(record: &ParameterRecord) -> TransformResult<Self> {
        if let Some(unknown) = record
            .field_names()
            .find(|name| !GAUSSIAN_FIELDS.contains(name))
        {
            return Err(TransformError::invalid(
                GAUSSIAN_TAG,
                format!("unknown field `{unknown}`, expected `center` or `std_dev`"),
            ));
        }

        let params = Self {
            kind: record.kind().to_string(),
            center: narrow_field(record, "center")?,
            std_dev: narrow_field(record, "std_dev")?,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> TransformResult<()> {
        if !self.center.is_valid() {
            return Err(TransformError::invalid(
                GAUSSIAN_TAG,
                format!("center must be finite, got {:e}", self.center.to_f64_lossy()),
            ));
        }
        if !self.std_dev.is_valid() || self.std_dev <= T::ZERO {
            return Err(TransformError::invalid(
                GAUSSIAN_TAG,
                format!(
                    "std_dev must be a finite value > 0, got {:e}",
                    self.std_dev.to_f64_lossy()
                ),
            ));
        }
        Ok(())
    }
}

/// Gaussian Normalization Transform.
///
/// Maps each measurement to `exp(−z²/2)` where `z` is its distance from
/// `center` in units of `std_dev`: 1.0 at the center, symmetric, decreasing
/// towards 0 as the distance grows.
///
/// The [`Normal`] kernel is built once at construction and shared by every
/// call; the transform holds no other state.
///
/// # Example
///
/// ```rust
/// use score_core::prelude::*;
/// use score_transforms::{GaussianNormalization, GaussianParameters};
///
/// let params = GaussianParameters::new(50.0f64, 10.0).unwrap();
/// let gaussian = GaussianNormalization::construct(params).unwrap();
///
/// assert_eq!(gaussian.invoke(50.0), 1.0);
/// let scores = gaussian.invoke([40.0, 60.0]);
/// assert!((scores[0] - (-0.5f64).exp()).abs() < 1e-12);
/// assert_eq!(scores[0], scores[1]);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianNormalization<T: ScoreFloat> {
    params: GaussianParameters<T>,
    distribution: Normal<T>,
}

impl<T: ScoreFloat> GaussianNormalization<T> {
    /// The value receiving the maximum score.
    #[must_use]
    pub fn center(&self) -> T {
        self.params.center
    }

    /// Width of the bell curve.
    #[must_use]
    pub fn std_dev(&self) -> T {
        self.params.std_dev
    }

    /// The precomputed similarity kernel.
    #[must_use]
    pub fn distribution(&self) -> &Normal<T> {
        &self.distribution
    }
}

impl<T: ScoreFloat> Transform<T> for GaussianNormalization<T> {
    fn tag(&self) -> &'static str {
        GAUSSIAN_TAG
    }

    #[inline]
    fn score(&self, value: T) -> T {
        self.distribution
            .relative_density(value)
            .clamp_value(T::ZERO, T::ONE)
    }
}

impl<T: ScoreFloat> TransformVariant<T> for GaussianNormalization<T> {
    const TAG: &'static str = GAUSSIAN_TAG;
    type Params = GaussianParameters<T>;

    fn build(params: Self::Params) -> TransformResult<Self> {
        let distribution = Normal::new(params.center, params.std_dev).ok_or_else(|| {
            TransformError::invalid(
                GAUSSIAN_TAG,
                format!(
                    "no normal distribution with center {:e} and std_dev {:e}",
                    params.center.to_f64_lossy(),
                    params.std_dev.to_f64_lossy()
                ),
            )
        })?;

        debug!(
            center = params.center.to_f64_lossy(),
            std_dev = params.std_dev.to_f64_lossy(),
            "constructed gaussian transform"
        );

        Ok(Self {
            params,
            distribution,
        })
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }
}
