//! Closure-backed validator

use std::fmt;

use crate::foundation::{CoerceOptions, Validate, ValidationError};
use crate::value::{Value, ValueKind};

/// Accepts a value when the wrapped closure returns `true`.
pub struct Predicate<F> {
    f: F,
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        _options: &CoerceOptions,
    ) -> Result<(), ValidationError> {
        if (self.f)(value) {
            Ok(())
        } else {
            Err(ValidationError::rejected("predicate"))
        }
    }

    fn name(&self) -> &str {
        "predicate"
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Creates a validator from a boolean closure.
///
/// # Examples
///
/// ```
/// use strata_validator::foundation::{CoerceOptions, Validate};
/// use strata_validator::validators::predicate;
/// use strata_validator::value::Value;
///
/// let positive = predicate(|v| v.as_f64().is_some_and(|x| x > 0.0));
/// let options = CoerceOptions::default();
/// assert!(positive.validate(&Value::Int(3), None, &options).is_ok());
/// assert!(positive.validate(&Value::Int(-3), None, &options).is_err());
/// ```
pub fn predicate<F>(f: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate { f }
}
