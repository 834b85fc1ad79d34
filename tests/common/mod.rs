//! Common test utilities for rust-score.
//!
//! Float comparison and golden fixture loading shared by workspace-level tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use score_core::ParameterRecord;

/// Float comparison with NaN/infinity awareness.
///
/// - NaN matches only NaN
/// - infinities match only the same-signed infinity
/// - values near zero (|expected| < 1e-10) use absolute tolerance
/// - everything else uses relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(
            actual.is_nan(),
            "{}: Expected NaN but got {}",
            context,
            actual
        );
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    if expected.is_infinite() {
        assert!(
            actual.is_infinite() && actual.signum() == expected.signum(),
            "{}: Expected {} but got {}",
            context,
            expected,
            actual
        );
        return;
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two score batches are equal with tolerance.
pub fn assert_scores_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

/// One golden case: a parameter record, inputs, and expected scores.
///
/// `null` in `input` or `expected` stands for NaN.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    /// Human-readable case name.
    pub name: String,
    /// Parameter record handed to the registry.
    pub params: ParameterRecord,
    /// Raw measurements.
    #[serde(deserialize_with = "nullable_floats")]
    pub input: Vec<f64>,
    /// Expected scores, element-wise.
    #[serde(deserialize_with = "nullable_floats")]
    pub expected: Vec<f64>,
}

/// Golden fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenData {
    /// All cases in the fixture.
    pub cases: Vec<GoldenCase>,
}

impl GoldenData {
    /// Load golden data from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn nullable_floats<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Evenly spaced values from `start`, `len` of them, `step` apart.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_assert_float_eq_nan() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_generate_linear() {
        assert_eq!(generate_linear(-1.0, 0.5, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }
}
