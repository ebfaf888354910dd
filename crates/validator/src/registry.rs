//! Default-converter selection by expected kind

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::converters::{Identity, SequenceConverter, TimestampConverter};
use crate::foundation::Convert;
use crate::value::ValueKind;

/// Maps an expected [`ValueKind`] to the converter used when the caller
/// supplies none.
///
/// [`ConverterRegistry::default`] knows two kinds: `List` (string splitting)
/// and `DateTime` (timestamp parsing). Every other kind resolves to
/// [`Identity`].
///
/// # Examples
///
/// ```
/// use strata_validator::converters::from_fn;
/// use strata_validator::foundation::ConversionError;
/// use strata_validator::registry::ConverterRegistry;
/// use strata_validator::value::{Value, ValueKind};
///
/// let mut registry = ConverterRegistry::default();
/// registry.register(
///     ValueKind::Int,
///     from_fn(|v| match v {
///         Value::String(s) => s
///             .parse::<i64>()
///             .map(Value::Int)
///             .map_err(|e| ConversionError::custom(e.to_string())),
///         other => Ok(other.clone()),
///     }),
/// );
/// assert!(registry.contains(ValueKind::Int));
/// ```
#[derive(Clone)]
pub struct ConverterRegistry {
    converters: HashMap<ValueKind, Arc<dyn Convert>>,
    fallback: Arc<dyn Convert>,
}

impl ConverterRegistry {
    /// Creates a registry with no kind-specific converters.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
            fallback: Arc::new(Identity),
        }
    }

    /// Registers `converter` for `kind`, returning the one it replaced.
    pub fn register<C>(&mut self, kind: ValueKind, converter: C) -> Option<Arc<dyn Convert>>
    where
        C: Convert + 'static,
    {
        self.converters.insert(kind, Arc::new(converter))
    }

    /// Registers an already shared converter.
    pub fn register_arc(
        &mut self,
        kind: ValueKind,
        converter: Arc<dyn Convert>,
    ) -> Option<Arc<dyn Convert>> {
        self.converters.insert(kind, converter)
    }

    /// Removes the converter for `kind`; lookups fall back to identity.
    pub fn unregister(&mut self, kind: ValueKind) -> Option<Arc<dyn Convert>> {
        self.converters.remove(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: ValueKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Resolves the converter for an expected kind.
    ///
    /// Unknown kinds and `None` both resolve to the identity converter.
    #[must_use]
    pub fn get(&self, kind: Option<ValueKind>) -> &dyn Convert {
        kind.and_then(|k| self.converters.get(&k))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Returns the number of kind-specific converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ValueKind::List, SequenceConverter);
        registry.register(ValueKind::DateTime, TimestampConverter::default());
        registry
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.converters.keys().copied().collect();
        kinds.sort();
        f.debug_struct("ConverterRegistry")
            .field("kinds", &kinds)
            .finish_non_exhaustive()
    }
}
