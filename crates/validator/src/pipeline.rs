//! Convert-then-validate pipeline
//!
//! [`Coercion`] bundles everything one coercion needs: the expected kind, a
//! default, an optional converter and validator, and the options handed to
//! both. Running it never fails: a failed conversion keeps the original
//! value, a failed validation yields the default.

use std::fmt;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::foundation::{CoerceOptions, Convert, PostProcess, Validate};
use crate::registry::ConverterRegistry;
use crate::validators::TypeCheck;
use crate::value::{Value, ValueKind};

static DEFAULT_REGISTRY: LazyLock<ConverterRegistry> = LazyLock::new(ConverterRegistry::default);

/// Returns the built-in converter registry.
#[must_use]
pub fn default_registry() -> &'static ConverterRegistry {
    &DEFAULT_REGISTRY
}

/// A configured coercion.
///
/// # Examples
///
/// ```
/// use strata_validator::pipeline::Coercion;
/// use strata_validator::value::{Value, ValueKind};
///
/// let tags = Coercion::expect(ValueKind::List).separator(";");
/// assert_eq!(tags.apply(Value::from("a;b")), Value::strings(["a", "b"]));
///
/// // A list where a string is expected falls back to the default.
/// let name = Coercion::expect(ValueKind::String).default("anonymous");
/// assert_eq!(name.apply(Value::strings(["x"])), Value::from("anonymous"));
/// ```
#[derive(Clone, Default)]
pub struct Coercion {
    expected: Option<ValueKind>,
    default: Value,
    converter: Option<Arc<dyn Convert>>,
    validator: Option<Arc<dyn Validate>>,
    options: CoerceOptions,
}

impl Coercion {
    /// A coercion with no expected kind.
    ///
    /// Unless a validator is supplied, it always returns the default.
    #[must_use]
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// A coercion towards `kind`.
    #[must_use]
    pub fn expect(kind: ValueKind) -> Self {
        Self {
            expected: Some(kind),
            ..<Self as Default>::default()
        }
    }

    /// Sets the value returned when validation fails. Defaults to `Null`.
    #[must_use = "builder methods must be chained or built"]
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Overrides the registry-selected converter.
    #[must_use = "builder methods must be chained or built"]
    pub fn converter(mut self, converter: impl Convert + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Overrides the type-membership validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn validator(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = Some(separator.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.options.format = Some(format.into());
        self
    }

    /// Replaces all options at once.
    #[must_use = "builder methods must be chained or built"]
    pub fn options(mut self, options: CoerceOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn expected(&self) -> Option<ValueKind> {
        self.expected
    }

    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    #[must_use]
    pub fn coerce_options(&self) -> &CoerceOptions {
        &self.options
    }

    /// Runs the coercion with the built-in registry.
    pub fn apply(&self, value: Value) -> Value {
        self.apply_with(value, default_registry())
    }

    /// Runs the coercion, resolving the default converter from `registry`.
    pub fn apply_with(&self, value: Value, registry: &ConverterRegistry) -> Value {
        let converter: &dyn Convert = match &self.converter {
            Some(c) => c.as_ref(),
            None => registry.get(self.expected),
        };

        let converted = match converter.convert(&value, self.expected, &self.options) {
            Ok(converted) => converted,
            Err(error) => {
                warn!(
                    converter = converter.name(),
                    value = %value,
                    %error,
                    "conversion failed, keeping original value"
                );
                value
            }
        };

        let validator: &dyn Validate = match &self.validator {
            Some(v) => v.as_ref(),
            None => &TypeCheck,
        };

        match validator.validate(&converted, self.expected, &self.options) {
            Ok(()) => converted,
            Err(error) => {
                debug!(
                    validator = validator.name(),
                    value = %converted,
                    %error,
                    "validation failed, using default"
                );
                self.default.clone()
            }
        }
    }
}

impl PostProcess for Coercion {
    fn process(&self, value: Value) -> Value {
        self.apply(value)
    }
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coercion")
            .field("expected", &self.expected)
            .field("default", &self.default)
            .field("converter", &self.converter.as_ref().map(|c| c.name().to_owned()))
            .field("validator", &self.validator.as_ref().map(|v| v.name().to_owned()))
            .field("options", &self.options)
            .finish()
    }
}

/// Converts `value` towards the expected kind and validates the result.
///
/// Returns the converted value if it validates, otherwise the coercion's
/// default. Uses the built-in converter registry.
pub fn coerce_and_validate(value: Value, coercion: &Coercion) -> Value {
    coercion.apply(value)
}
