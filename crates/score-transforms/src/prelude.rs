//! Prelude module for convenient imports.

pub use crate::gaussian::{GaussianNormalization, GaussianParameters, GAUSSIAN_TAG};
pub use crate::registry::{TransformFactory, TransformRegistry};
