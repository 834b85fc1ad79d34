//! Untyped parameter records.
//!
//! A [`ParameterRecord`] is what a configuration loader hands to the registry: a
//! `type` tag naming the transform variant plus its named numeric fields. Each
//! variant converts the record into its own typed, validated parameter value.
//!
//! With the `serde` feature a record deserializes from the flat shape
//! `{ "type": "gaussian", "center": 50, "std_dev": 10 }`.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};

/// A type tag plus named numeric fields, in insertion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterRecord {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    fields: IndexMap<String, f64>,
}

impl ParameterRecord {
    /// Create an empty record for the given type tag.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field setter. A repeated name replaces the earlier value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Parse a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Serialization`] if the text is not a JSON object
    /// with a string `type` and numeric remaining fields.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> TransformResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| TransformError::serialization("parsing parameter record", e))
    }

    /// The type tag this record targets.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    /// Look up a field that `transform` requires.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if the field is absent.
    pub fn require(&self, transform: &str, name: &str) -> TransformResult<f64> {
        self.get(name)
            .ok_or_else(|| TransformError::missing(transform, name))
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
