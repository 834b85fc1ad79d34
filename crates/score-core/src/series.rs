//! Measurement series container.
//!
//! The [`Series`] type holds a batch of raw measurements (or the scores computed
//! from them) in input order. Transforms map a `Series` to a `Series` of the same
//! length.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::ScoreFloat;

/// A contiguous, ordered batch of floating-point values.
///
/// # Example
///
/// ```rust
/// use score_core::Series;
///
/// let series: Series<f64> = Series::from_vec(vec![48.0, 50.0, 61.5]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[1], 50.0);
/// assert_eq!(series.max(), 61.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: ScoreFloat", transparent))]
pub struct Series<T: ScoreFloat> {
    data: Vec<T>,
}

impl<T: ScoreFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScoreFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply a function to each element, preserving order and length.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Self { data }
    }

    /// Count the number of NaN values.
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_nan()).count()
    }

    /// Compute the minimum value (excluding NaN).
    ///
    /// Returns `+inf` for an empty or all-NaN series.
    #[must_use]
    pub fn min(&self) -> T {
        self.data
            .iter()
            .filter(|x| !x.is_nan())
            .fold(T::INFINITY, |acc, &x| if x < acc { x } else { acc })
    }

    /// Compute the maximum value (excluding NaN).
    ///
    /// Returns `-inf` for an empty or all-NaN series.
    #[must_use]
    pub fn max(&self) -> T {
        self.data
            .iter()
            .filter(|x| !x.is_nan())
            .fold(T::NEG_INFINITY, |acc, &x| if x > acc { x } else { acc })
    }
}

impl<T: ScoreFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: ScoreFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: ScoreFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: ScoreFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: ScoreFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
