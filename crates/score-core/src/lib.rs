//! # score-core
//!
//! Core types and traits for score transforms.
//!
//! A score transform maps raw measurements to a similarity score in [0, 1]. This
//! crate provides the pieces every transform variant is built from:
//!
//! - [`ScoreFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Ordered batch of measurements or scores
//! - [`ParameterRecord`] - Untyped `type` tag plus named numeric fields
//! - [`Normal`] - Gaussian distribution used as a similarity kernel
//! - [`Transform`], [`TransformVariant`], [`TransformExt`] - The transform contract
//! - [`TransformError`] - Construction and registration errors
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Serialization support and JSON parameter records
//!
//! ## Example
//!
//! ```rust
//! use score_core::prelude::*;
//!
//! let kernel = Normal::new(50.0f64, 10.0).unwrap();
//! let similarity = kernel.pdf(60.0) / kernel.peak_density();
//! assert!((similarity - kernel.relative_density(60.0)).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod distribution;
pub mod error;
pub mod num;
pub mod params;
pub mod prelude;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use distribution::Normal;
pub use error::{TransformError, TransformResult};
pub use num::ScoreFloat;
pub use params::ParameterRecord;
pub use series::Series;
pub use traits::{ScoreInput, Transform, TransformExt, TransformParameters, TransformVariant};
