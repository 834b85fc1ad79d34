//! Error types for transform construction and registration.
//!
//! Invocation of a constructed transform never fails; every variant here is raised
//! while building a transform or maintaining the tag registry.

use thiserror::Error;

/// Result type alias for transform operations that may fail.
pub type TransformResult<T> = core::result::Result<T, TransformError>;

/// Errors that can occur while registering or constructing transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A parameter is missing or violates its constraint.
    #[error("Invalid parameters for '{transform}': {reason}")]
    InvalidParameters {
        /// Tag of the transform being constructed.
        transform: String,
        /// What was wrong with the parameters.
        reason: String,
    },

    /// The parameter record targets a different transform variant.
    #[error("Type mismatch: expected '{expected}', got '{actual}'")]
    TypeMismatch {
        /// Tag of the variant being constructed.
        expected: String,
        /// Tag carried by the parameter record.
        actual: String,
    },

    /// A transform is already registered under this tag.
    #[error("Duplicate transform tag: '{0}'")]
    DuplicateTag(String),

    /// No transform is registered under this tag.
    #[error("Unknown transform tag: '{0}'")]
    UnknownTag(String),

    /// The process-wide registry has already been fixed.
    #[error("Transform registry is already initialized")]
    RegistryFrozen,

    /// Serialization or deserialization failed.
    #[error("Serialization failed: {context}")]
    Serialization {
        /// Context describing the serialization operation.
        context: String,
        /// Underlying serialization error message.
        source_message: String,
    },
}

impl TransformError {
    /// Create an invalid-parameters error.
    #[must_use]
    pub fn invalid(transform: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            transform: transform.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameters error for a required field that is absent.
    #[must_use]
    pub fn missing(transform: impl Into<String>, field: &str) -> Self {
        Self::invalid(transform, format!("missing required field '{field}'"))
    }

    /// Create a serialization error with context.
    #[must_use]
    pub fn serialization(context: impl Into<String>, source: impl core::fmt::Display) -> Self {
        Self::Serialization {
            context: context.into(),
            source_message: source.to_string(),
        }
    }
}
