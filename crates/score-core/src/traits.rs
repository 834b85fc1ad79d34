//! Core trait definitions for score transforms.
//!
//! A transform is split across three traits:
//!
//! - [`Transform`] is the object-safe calling convention: a tag and a scalar
//!   scoring kernel. Registries hand out `Box<dyn Transform<T>>`.
//! - [`TransformVariant`] is the construction protocol for a concrete type: its
//!   tag, its parameter type, and how a validated instance is built.
//! - [`TransformExt::invoke`] lifts the scalar kernel over any [`ScoreInput`]
//!   shape (scalar, array, slice, `Vec`, [`Series`]) preserving that shape.

use core::fmt::Debug;

use crate::error::{TransformError, TransformResult};
use crate::num::ScoreFloat;
use crate::params::ParameterRecord;
use crate::series::Series;

/// Calling convention shared by every transform variant.
///
/// Implementations must be pure: `score` depends only on its argument and the
/// instance's immutable parameters, so a transform may be shared across threads
/// and invoked concurrently.
pub trait Transform<T: ScoreFloat>: Send + Sync + Debug {
    /// Type tag this transform is registered under.
    fn tag(&self) -> &'static str;

    /// Score a single measurement into [0, 1].
    ///
    /// NaN input yields NaN; no other input may produce a value outside [0, 1].
    fn score(&self, value: T) -> T;
}

/// Typed, validated parameters for one transform variant.
pub trait TransformParameters: Clone + Debug + Send + Sync + Sized {
    /// The type tag these parameters claim to target.
    fn kind(&self) -> &str;

    /// Convert an untyped record into typed parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if a required field is
    /// missing or out of range.
    fn from_record(record: &ParameterRecord) -> TransformResult<Self>;

    /// Check every field constraint.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] on the first violation.
    fn validate(&self) -> TransformResult<()>;
}

/// Construction protocol for a concrete transform type.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl<T: ScoreFloat> TransformVariant<T> for GaussianNormalization<T> {
///     const TAG: &'static str = "gaussian";
///     type Params = GaussianParameters<T>;
///
///     fn build(params: Self::Params) -> TransformResult<Self> { /* ... */ }
///     fn params(&self) -> &Self::Params { &self.params }
/// }
/// ```
pub trait TransformVariant<T: ScoreFloat>: Transform<T> + Sized + 'static {
    /// Type tag of this variant.
    const TAG: &'static str;

    /// Parameter type this variant accepts.
    type Params: TransformParameters;

    /// Build an instance from parameters that already passed the tag check and
    /// [`TransformParameters::validate`]. Callers go through [`construct`](Self::construct).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if derived state cannot be
    /// built from otherwise valid parameters.
    fn build(params: Self::Params) -> TransformResult<Self>;

    /// The parameters this instance was constructed from.
    fn params(&self) -> &Self::Params;

    /// Validate `params` and construct an immutable instance.
    ///
    /// # Errors
    ///
    /// - [`TransformError::TypeMismatch`] if `params.kind()` is not [`Self::TAG`]
    /// - [`TransformError::InvalidParameters`] if validation fails
    fn construct(params: Self::Params) -> TransformResult<Self> {
        check_kind(Self::TAG, params.kind())?;
        params.validate()?;
        Self::build(params)
    }

    /// Construct from an untyped record.
    ///
    /// The tag is checked before any field is read, so a record for another
    /// variant reports [`TransformError::TypeMismatch`] rather than missing fields.
    ///
    /// # Errors
    ///
    /// Same as [`construct`](Self::construct).
    fn from_record(record: &ParameterRecord) -> TransformResult<Self> {
        check_kind(Self::TAG, record.kind())?;
        Self::construct(Self::Params::from_record(record)?)
    }
}

fn check_kind(expected: &str, actual: &str) -> TransformResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TransformError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// An input shape a transform can be invoked on.
///
/// `Output` has the same shape as the input: scalars map to scalars, arrays to
/// arrays of the same length, slices and vectors to vectors, series to series.
pub trait ScoreInput<T: ScoreFloat> {
    /// Shape of the scores produced for this input.
    type Output;

    /// Apply `f` to every element, preserving shape and order.
    fn map_scores<F: Fn(T) -> T>(self, f: F) -> Self::Output;
}

macro_rules! impl_scalar_input {
    ($($t:ty),*) => {
        $(
            impl ScoreInput<$t> for $t {
                type Output = $t;

                #[inline]
                fn map_scores<F: Fn($t) -> $t>(self, f: F) -> Self::Output {
                    f(self)
                }
            }
        )*
    };
}

impl_scalar_input!(f32, f64);

impl<T: ScoreFloat, const N: usize> ScoreInput<T> for [T; N] {
    type Output = [T; N];

    fn map_scores<F: Fn(T) -> T>(self, f: F) -> Self::Output {
        self.map(f)
    }
}

impl<T: ScoreFloat> ScoreInput<T> for &[T] {
    type Output = Vec<T>;

    fn map_scores<F: Fn(T) -> T>(self, f: F) -> Self::Output {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl<T: ScoreFloat> ScoreInput<T> for Vec<T> {
    type Output = Vec<T>;

    fn map_scores<F: Fn(T) -> T>(mut self, f: F) -> Self::Output {
        for x in &mut self {
            *x = f(*x);
        }
        self
    }
}

impl<T: ScoreFloat> ScoreInput<T> for &Series<T> {
    type Output = Series<T>;

    fn map_scores<F: Fn(T) -> T>(self, f: F) -> Self::Output {
        self.map(f)
    }
}

impl<T: ScoreFloat> ScoreInput<T> for Series<T> {
    type Output = Series<T>;

    fn map_scores<F: Fn(T) -> T>(self, f: F) -> Self::Output {
        Series::from_vec(self.into_vec().map_scores(f))
    }
}

/// Shape-preserving invocation, available on every [`Transform`] including
/// trait objects.
pub trait TransformExt<T: ScoreFloat>: Transform<T> {
    /// Score every element of `values`, returning the same shape.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let scores = transform.invoke([40.0, 50.0, 60.0]);
    /// let one = transform.invoke(50.0);
    /// ```
    fn invoke<I: ScoreInput<T>>(&self, values: I) -> I::Output {
        values.map_scores(|v| self.score(v))
    }
}

impl<T: ScoreFloat, X: Transform<T> + ?Sized> TransformExt<T> for X {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores 1 inside [lo, hi] and 0 outside.
    #[derive(Debug, Clone)]
    struct Window {
        kind: String,
        lo: f64,
        hi: f64,
    }

    impl TransformParameters for Window {
        fn kind(&self) -> &str {
            &self.kind
        }

        fn from_record(record: &ParameterRecord) -> TransformResult<Self> {
            Ok(Self {
                kind: record.kind().to_string(),
                lo: record.require("window", "lo")?,
                hi: record.require("window", "hi")?,
            })
        }

        fn validate(&self) -> TransformResult<()> {
            if self.lo <= self.hi {
                Ok(())
            } else {
                Err(TransformError::invalid("window", "lo must be <= hi"))
            }
        }
    }

    #[derive(Debug)]
    struct WindowTransform {
        params: Window,
    }

    impl Transform<f64> for WindowTransform {
        fn tag(&self) -> &'static str {
            "window"
        }

        fn score(&self, value: f64) -> f64 {
            if value.is_nan() {
                value
            } else if (self.params.lo..=self.params.hi).contains(&value) {
                1.0
            } else {
                0.0
            }
        }
    }

    impl TransformVariant<f64> for WindowTransform {
        const TAG: &'static str = "window";
        type Params = Window;

        fn build(params: Self::Params) -> TransformResult<Self> {
            Ok(Self { params })
        }

        fn params(&self) -> &Self::Params {
            &self.params
        }
    }

    fn window() -> WindowTransform {
        WindowTransform::from_record(
            &ParameterRecord::new("window").with("lo", 0.0).with("hi", 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_construct_checks_kind_then_validates() {
        let err = WindowTransform::construct(Window {
            kind: "other".to_string(),
            lo: 2.0,
            hi: 1.0,
        })
        .unwrap_err();
        assert!(matches!(err, TransformError::TypeMismatch { .. }));

        let err = WindowTransform::construct(Window {
            kind: "window".to_string(),
            lo: 2.0,
            hi: 1.0,
        })
        .unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameters { .. }));
    }

    #[test]
    fn test_from_record_reports_mismatch_before_missing_fields() {
        let err = WindowTransform::from_record(&ParameterRecord::new("gaussian")).unwrap_err();
        assert_eq!(
            err,
            TransformError::TypeMismatch {
                expected: "window".to_string(),
                actual: "gaussian".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_preserves_shape() {
        let t = window();

        assert_eq!(t.invoke(0.5), 1.0);
        assert_eq!(t.invoke([-1.0, 0.5, 2.0]), [0.0, 1.0, 0.0]);
        assert_eq!(t.invoke(&[0.0, 3.0][..]), vec![1.0, 0.0]);
        assert_eq!(t.invoke(vec![1.0]), vec![1.0]);

        let series = Series::from_vec(vec![0.25, 1.5]);
        assert_eq!(t.invoke(&series).as_slice(), &[1.0, 0.0]);
        assert_eq!(t.invoke(series).len(), 2);
        assert_eq!(t.params().hi, 1.0);
    }

    #[test]
    fn test_invoke_through_trait_object() {
        let boxed: Box<dyn Transform<f64>> = Box::new(window());

        assert_eq!(boxed.tag(), "window");
        assert_eq!(boxed.invoke([0.5, 5.0]), [1.0, 0.0]);
        assert!(boxed.invoke(f64::NAN).is_nan());
    }
}
