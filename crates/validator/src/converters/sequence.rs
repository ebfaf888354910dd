//! String-to-list converter

use crate::foundation::{CoerceOptions, ConversionError, Convert, DEFAULT_SEPARATOR};
use crate::value::{Value, ValueKind};

/// Splits a string into a list of strings; any other value passes through.
///
/// No trimming and no filtering of empty segments. `None` or an empty
/// separator means `","`.
///
/// # Examples
///
/// ```
/// use strata_validator::converters::convert_to_sequence;
/// use strata_validator::value::Value;
///
/// assert_eq!(
///     convert_to_sequence(&Value::from("a,,b"), None),
///     Value::strings(["a", "", "b"])
/// );
/// assert_eq!(convert_to_sequence(&Value::Int(7), Some(";")), Value::Int(7));
/// ```
pub fn convert_to_sequence(value: &Value, separator: Option<&str>) -> Value {
    match value {
        Value::String(s) => {
            let separator = match separator {
                Some(sep) if !sep.is_empty() => sep,
                _ => DEFAULT_SEPARATOR,
            };
            Value::strings(s.split(separator))
        }
        other => other.clone(),
    }
}

/// [`Convert`] adaptor over [`convert_to_sequence`].
///
/// Reads [`CoerceOptions::separator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceConverter;

impl Convert for SequenceConverter {
    fn convert(
        &self,
        value: &Value,
        _expected: Option<ValueKind>,
        options: &CoerceOptions,
    ) -> Result<Value, ConversionError> {
        Ok(convert_to_sequence(value, Some(options.separator())))
    }

    fn name(&self) -> &str {
        "sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a;b;c", Some(";"), &["a", "b", "c"])]
    #[case("a,b,c", None, &["a", "b", "c"])]
    #[case("a,,b", None, &["a", "", "b"])]
    #[case(" a , b ", Some(","), &[" a ", " b "])]
    #[case("", None, &[""])]
    #[case("abc", Some(""), &["abc"])]
    #[case("a::b", Some("::"), &["a", "b"])]
    fn splits_strings(#[case] input: &str, #[case] sep: Option<&str>, #[case] expected: &[&str]) {
        assert_eq!(
            convert_to_sequence(&Value::from(input), sep),
            Value::strings(expected.iter().copied())
        );
    }

    #[test]
    fn lists_pass_through() {
        let list = Value::strings(["a", "b"]);
        assert_eq!(convert_to_sequence(&list, None), list);
    }

    #[test]
    fn converter_uses_option_separator() {
        let options = CoerceOptions::default().with_separator("|");
        let out = SequenceConverter
            .convert(&Value::from("x|y"), Some(ValueKind::List), &options)
            .unwrap();
        assert_eq!(out, Value::strings(["x", "y"]));
    }
}
