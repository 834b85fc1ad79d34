//! # score-transforms
//!
//! Concrete score transforms and the tag-dispatched registry that builds them
//! from configuration records.
//!
//! - `GaussianNormalization`: bell-curve similarity to an ideal center value
//! - `TransformRegistry`: explicit tag → factory table
//! - `global` / `install_global` / `construct`: write-once process-wide registry
//!
//! # Example
//!
//! ```rust
//! use score_core::prelude::*;
//! use score_transforms::prelude::*;
//!
//! let record = ParameterRecord::new("gaussian").with("center", 50.0).with("std_dev", 10.0);
//! let transform = score_transforms::construct(&record).unwrap();
//!
//! let scores = transform.invoke(vec![50.0, 60.0, 70.0]);
//! assert_eq!(scores[0], 1.0);
//! assert!((scores[2] - (-2.0f64).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod gaussian;
mod registry;

pub mod prelude;

pub use gaussian::{GaussianNormalization, GaussianParameters, GAUSSIAN_TAG};
pub use registry::{construct, global, install_global, TransformFactory, TransformRegistry};
