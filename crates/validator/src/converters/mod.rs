//! Built-in converters
//!
//! - [`Identity`]: returns the value unchanged
//! - [`SequenceConverter`] / [`convert_to_sequence`]: string to list of strings
//! - [`TimestampConverter`] / [`convert_to_timestamp`]: numbers and strings to datetimes
//! - [`from_fn`]: adapts a one-argument closure

pub mod sequence;
pub mod timestamp;

pub use sequence::{SequenceConverter, convert_to_sequence};
pub use timestamp::{
    Disambiguation, TimeFormat, TimestampConverter, TimestampParser, convert_to_timestamp,
    from_epoch_seconds, parse_with_format,
};

use crate::foundation::{CoerceOptions, ConversionError, Convert};
use crate::value::{Value, ValueKind};

/// Pass-through converter; the registry's fallback for kinds without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Convert for Identity {
    fn convert(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        _options: &CoerceOptions,
    ) -> Result<Value, ConversionError> {
        Ok(value.clone())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Converter built from a closure that only looks at the value.
pub struct FromFn<F> {
    f: F,
}

impl<F> Convert for FromFn<F>
where
    F: Fn(&Value) -> Result<Value, ConversionError> + Send + Sync,
{
    fn convert(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        _options: &CoerceOptions,
    ) -> Result<Value, ConversionError> {
        (self.f)(value)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a converter from a closure.
///
/// # Examples
///
/// ```
/// use strata_validator::converters::from_fn;
/// use strata_validator::foundation::{CoerceOptions, ConversionError, Convert};
/// use strata_validator::value::Value;
///
/// let strip = from_fn(|v| match v {
///     Value::String(s) => Ok(Value::from(s.strip_suffix("_more").unwrap_or(s))),
///     _ => Err(ConversionError::custom("not a string")),
/// });
/// let out = strip.convert(&Value::from("blah_more"), None, &CoerceOptions::default());
/// assert_eq!(out, Ok(Value::from("blah")));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Value) -> Result<Value, ConversionError> + Send + Sync,
{
    FromFn { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_clones() {
        let value = Value::strings(["a"]);
        let out = Identity.convert(&value, Some(ValueKind::String), &CoerceOptions::default());
        assert_eq!(out, Ok(value));
    }

    #[test]
    fn from_fn_propagates_errors() {
        let failing = from_fn(|_| Err(ConversionError::custom("boom")));
        let err = failing
            .convert(&Value::Null, None, &CoerceOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
