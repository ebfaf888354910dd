//! Capability traits of the coercion pipeline
//!
//! Three seams, each with a closure blanket impl so callers can plug in a
//! plain function:
//!
//! - [`Convert`]: turns a value into (hopefully) the expected kind
//! - [`Validate`]: accepts or rejects the converted value
//! - [`PostProcess`]: consumes the value reached by a path walk

use crate::foundation::{CoerceOptions, ConversionError, ValidationError};
use crate::value::{Value, ValueKind};

// ============================================================================
// CONVERTER TRAIT
// ============================================================================

/// A best-effort conversion towards an expected kind.
///
/// Returning `Err` means "conversion did not succeed"; the pipeline logs the
/// error and continues with the original value.
///
/// # Examples
///
/// ```
/// use strata_validator::foundation::{CoerceOptions, ConversionError, Convert};
/// use strata_validator::value::{Value, ValueKind};
///
/// struct Upper;
///
/// impl Convert for Upper {
///     fn convert(
///         &self,
///         value: &Value,
///         _expected: Option<ValueKind>,
///         _options: &CoerceOptions,
///     ) -> Result<Value, ConversionError> {
///         match value {
///             Value::String(s) => Ok(Value::String(s.to_uppercase())),
///             other => Err(ConversionError::Unsupported {
///                 converter: "upper",
///                 found: other.kind(),
///             }),
///         }
///     }
/// }
///
/// let out = Upper.convert(&Value::from("abc"), None, &CoerceOptions::default());
/// assert_eq!(out, Ok(Value::from("ABC")));
/// ```
pub trait Convert: Send + Sync {
    /// Converts `value`, reading any options it recognises.
    fn convert(
        &self,
        value: &Value,
        expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<Value, ConversionError>;

    /// Returns the name of this converter, used in log lines.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Convert for F
where
    F: Fn(&Value, Option<ValueKind>, &CoerceOptions) -> Result<Value, ConversionError>
        + Send
        + Sync,
{
    fn convert(
        &self,
        value: &Value,
        expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<Value, ConversionError> {
        self(value, expected, options)
    }
}

// ============================================================================
// VALIDATOR TRAIT
// ============================================================================

/// Accepts or rejects a converted value.
///
/// The default validator of the pipeline is
/// [`TypeCheck`](crate::validators::TypeCheck), a type-membership test
/// against the expected kind.
pub trait Validate: Send + Sync {
    /// Validates the value against the expected kind.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is acceptable
    /// * `Err(ValidationError)` if it is not; the pipeline substitutes the default
    fn validate(
        &self,
        value: &Value,
        expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<(), ValidationError>;

    /// Returns the name of this validator, used in log lines.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Validate for F
where
    F: Fn(&Value, Option<ValueKind>, &CoerceOptions) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(
        &self,
        value: &Value,
        expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<(), ValidationError> {
        self(value, expected, options)
    }
}

// ============================================================================
// POST-PROCESSOR TRAIT
// ============================================================================

/// Consumes the value found at the end of a path walk.
///
/// [`Coercion`](crate::pipeline::Coercion) implements this, so a configured
/// pipeline can be handed straight to
/// [`extract_path`](crate::path::extract_path).
pub trait PostProcess {
    fn process(&self, value: Value) -> Value;
}

impl<F> PostProcess for F
where
    F: Fn(Value) -> Value,
{
    fn process(&self, value: Value) -> Value {
        self(value)
    }
}
