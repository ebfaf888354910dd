//! Type-membership validators

use crate::foundation::{CoerceOptions, Validate, ValidationError};
use crate::value::{Value, ValueKind};

/// Accepts a value whose kind is the expected kind.
///
/// With no expected kind there is nothing to be a member of, so the check
/// fails with `missing_expected_type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeCheck;

impl Validate for TypeCheck {
    fn validate(
        &self,
        value: &Value,
        expected: Option<ValueKind>,
        _options: &CoerceOptions,
    ) -> Result<(), ValidationError> {
        let Some(expected) = expected else {
            return Err(ValidationError::missing_expected_type());
        };
        if expected.matches(value) {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(expected, value.kind()))
        }
    }

    fn name(&self) -> &str {
        "TypeCheck"
    }
}

/// Accepts values of one fixed kind, whatever the expected kind is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindOf {
    pub kind: ValueKind,
}

impl Validate for KindOf {
    fn validate(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<(), ValidationError> {
        TypeCheck.validate(value, Some(self.kind), options)
    }

    fn name(&self) -> &str {
        "KindOf"
    }
}

#[must_use]
pub const fn kind_of(kind: ValueKind) -> KindOf {
    KindOf { kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("s"), ValueKind::String, true)]
    #[case(Value::strings(["s"]), ValueKind::List, true)]
    #[case(Value::strings(["s"]), ValueKind::String, false)]
    #[case(Value::Int(1), ValueKind::Float, false)]
    #[case(Value::Null, ValueKind::Null, true)]
    fn membership(#[case] value: Value, #[case] kind: ValueKind, #[case] ok: bool) {
        let result = TypeCheck.validate(&value, Some(kind), &CoerceOptions::default());
        assert_eq!(result.is_ok(), ok);
    }

    #[test]
    fn mismatch_reports_both_kinds() {
        let err = TypeCheck
            .validate(&Value::Int(1), Some(ValueKind::String), &CoerceOptions::default())
            .unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("actual"), Some("int"));
    }

    #[test]
    fn no_expected_kind_never_passes() {
        let err = TypeCheck
            .validate(&Value::Null, None, &CoerceOptions::default())
            .unwrap_err();
        assert_eq!(err.code, "missing_expected_type");
    }

    #[test]
    fn kind_of_ignores_expected() {
        let options = CoerceOptions::default();
        let check = kind_of(ValueKind::Int);
        assert!(check.validate(&Value::Int(3), Some(ValueKind::String), &options).is_ok());
        assert!(check.validate(&Value::from("3"), None, &options).is_err());
    }
}
