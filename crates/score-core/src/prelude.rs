//! Prelude module for convenient imports.
//!
//! ```rust
//! use score_core::prelude::*;
//!
//! let record = ParameterRecord::new("gaussian").with("center", 0.0).with("std_dev", 1.0);
//! assert_eq!(record.kind(), "gaussian");
//! ```

pub use crate::distribution::Normal;
pub use crate::error::{TransformError, TransformResult};
pub use crate::num::ScoreFloat;
pub use crate::params::ParameterRecord;
pub use crate::series::Series;
pub use crate::traits::{ScoreInput, Transform, TransformExt, TransformParameters, TransformVariant};
