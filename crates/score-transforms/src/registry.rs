//! Transform Registry.
//!
//! Maps type tags to factories so a transform can be selected from a
//! configuration value at runtime. The table is explicit: built-in variants are
//! listed in [`TransformRegistry::with_builtins`], and third-party variants are
//! added with [`TransformRegistry::register_variant`].
//!
//! The process-wide registry returned by [`global`] is write-once: it is either
//! installed once with [`install_global`] or defaults to the built-ins on first
//! access, and is read-only afterwards.

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use score_core::{
    error::{TransformError, TransformResult},
    num::ScoreFloat,
    params::ParameterRecord,
    traits::{Transform, TransformVariant},
};

use crate::gaussian::GaussianNormalization;

/// Builds a boxed transform from an untyped parameter record.
pub type TransformFactory<T> = fn(&ParameterRecord) -> TransformResult<Box<dyn Transform<T>>>;

fn variant_factory<T: ScoreFloat, V: TransformVariant<T>>(
    record: &ParameterRecord,
) -> TransformResult<Box<dyn Transform<T>>> {
    Ok(Box::new(V::from_record(record)?))
}

/// Tag → factory table.
///
/// # Example
///
/// ```rust
/// use score_core::prelude::*;
/// use score_transforms::TransformRegistry;
///
/// let registry = TransformRegistry::<f64>::with_builtins();
/// let record = ParameterRecord::new("gaussian").with("center", 0.0).with("std_dev", 1.0);
///
/// let transform = registry.construct(&record).unwrap();
/// assert_eq!(transform.invoke(0.0), 1.0);
/// ```
pub struct TransformRegistry<T: ScoreFloat> {
    factories: IndexMap<&'static str, TransformFactory<T>>,
}

impl<T: ScoreFloat> core::fmt::Debug for TransformRegistry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("tags", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: ScoreFloat> Default for TransformRegistry<T> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<T: ScoreFloat> TransformRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Create a registry holding every built-in transform variant.
    #[must_use]
    pub fn with_builtins() -> Self {
        let builtins: [(&'static str, TransformFactory<T>); 1] = [(
            <GaussianNormalization<T> as TransformVariant<T>>::TAG,
            variant_factory::<T, GaussianNormalization<T>>,
        )];

        let mut registry = Self::new();
        for (tag, factory) in builtins {
            debug_assert!(!registry.contains(tag), "duplicate built-in tag '{tag}'");
            registry.factories.insert(tag, factory);
        }
        registry
    }

    /// Associate `tag` with `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DuplicateTag`] if `tag` is already registered;
    /// the existing entry is left untouched.
    pub fn register(&mut self, tag: &'static str, factory: TransformFactory<T>) -> TransformResult<()> {
        if self.factories.contains_key(tag) {
            return Err(TransformError::DuplicateTag(tag.to_string()));
        }
        self.factories.insert(tag, factory);
        debug!(tag, "registered transform");
        Ok(())
    }

    /// Register a [`TransformVariant`] under its own tag.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DuplicateTag`] if `V::TAG` is already registered.
    pub fn register_variant<V: TransformVariant<T>>(&mut self) -> TransformResult<()> {
        self.register(V::TAG, variant_factory::<T, V>)
    }

    /// Resolve `record.type` and construct the transform it names.
    ///
    /// # Errors
    ///
    /// - [`TransformError::UnknownTag`] if no variant is registered under the tag
    /// - any error the variant's factory reports for the record
    pub fn construct(&self, record: &ParameterRecord) -> TransformResult<Box<dyn Transform<T>>> {
        let factory = self
            .factories
            .get(record.kind())
            .ok_or_else(|| TransformError::UnknownTag(record.kind().to_string()))?;
        factory(record)
    }

    /// Check whether a tag is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no tags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

static GLOBAL: OnceCell<TransformRegistry<f64>> = OnceCell::new();

/// Install the process-wide registry.
///
/// Must run before the first call to [`global`] or [`construct`].
///
/// # Errors
///
/// Returns [`TransformError::RegistryFrozen`] if the global registry is already
/// set, either by an earlier install or by a lookup that initialized it with
/// the built-ins.
pub fn install_global(registry: TransformRegistry<f64>) -> TransformResult<()> {
    let tags: Vec<_> = registry.tags().collect();
    GLOBAL
        .set(registry)
        .map_err(|_| TransformError::RegistryFrozen)?;
    debug!(?tags, "installed global transform registry");
    Ok(())
}

/// The process-wide registry, initialized with the built-ins if nothing was
/// installed.
pub fn global() -> &'static TransformRegistry<f64> {
    GLOBAL.get_or_init(TransformRegistry::with_builtins)
}

/// Construct a transform through the process-wide registry.
///
/// # Errors
///
/// Same as [`TransformRegistry::construct`].
pub fn construct(record: &ParameterRecord) -> TransformResult<Box<dyn Transform<f64>>> {
    global().construct(record)
}
