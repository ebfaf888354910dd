//! Value checks

use crate::foundation::ValidationError;
use crate::value::Value;

crate::validator! {
    /// Rejects `Null`.
    pub NotNull;
    rule(input) { !input.is_null() }
    error(input) { ValidationError::new("not_null", "Value must not be null") }
    fn not_null();
}

crate::validator! {
    /// Rejects empty strings, lists and maps, and `Null`.
    pub NotEmpty;
    rule(input) {
        match input {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            _ => true,
        }
    }
    error(input) {
        ValidationError::new("not_empty", "Value must not be empty")
            .with_param("actual", input.kind().as_str())
    }
    fn not_empty();
}

crate::validator! {
    /// Accepts only a value equal to the given one.
    pub Equals { value: Value };
    rule(self, input) { *input == self.value }
    error(self, input) {
        ValidationError::new("equals", format!("Expected {}, found {}", self.value, input))
    }
    new(value: impl Into<Value>) { Self { value: value.into() } }
    fn equals(value: impl Into<Value>);
}

crate::validator! {
    /// Accepts a value equal to any of the allowed ones.
    pub OneOf { allowed: Vec<Value> };
    rule(self, input) { self.allowed.contains(input) }
    error(self, input) {
        ValidationError::new("one_of", format!("{input} is not an allowed value"))
            .with_param("count", self.allowed.len().to_string())
    }
    new(allowed: impl IntoIterator<Item = Value>) {
        Self { allowed: allowed.into_iter().collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = Value>);
}
