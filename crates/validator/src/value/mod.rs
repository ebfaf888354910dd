//! Dynamic value model
//!
//! [`Value`] is the untyped currency of the coercion pipeline: everything a
//! converter receives or produces, every node the path extractor walks, and
//! every default the caller supplies.
//!
//! [`ValueKind`] is the tag of a variant. It doubles as the *expected type*
//! handed to the pipeline and as the key of the converter registry.

mod json;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered map of string keys to values.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value.
///
/// # Examples
///
/// ```
/// use strata_validator::value::{Value, ValueKind};
///
/// let v = Value::from("a,b,c");
/// assert_eq!(v.kind(), ValueKind::String);
/// assert_eq!(v.as_str(), Some("a,b,c"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence.
    List(Vec<Value>),
    /// String-keyed mapping, insertion ordered.
    Map(Map),
    /// Naive (wall-clock) date and time.
    DateTime(NaiveDateTime),
}

impl Value {
    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::DateTime(_) => ValueKind::DateTime,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for maps and lists, the values a path can descend into.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the value as seconds, if it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Builds a list of strings.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::List(_) | Value::Map(_) => {
                write!(f, "{}", serde_json::Value::from(self.clone()))
            }
        }
    }
}

// ============================================================================
// CONVERSIONS INTO VALUE
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Type tag of a [`Value`]; the expected type of a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    #[serde(alias = "timestamp")]
    DateTime,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::List,
        ValueKind::Map,
        ValueKind::DateTime,
    ];

    /// Type-membership check: does `value` belong to this kind?
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        value.kind() == self
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_every_variant() {
        let samples = [
            Value::Null,
            Value::Bool(true),
            Value::Int(1),
            Value::Float(1.5),
            Value::from("s"),
            Value::List(vec![]),
            Value::Map(Map::new()),
            Value::DateTime(NaiveDateTime::default()),
        ];
        for (value, kind) in samples.iter().zip(ValueKind::ALL) {
            assert_eq!(value.kind(), kind);
            assert!(kind.matches(value));
        }
    }

    #[test]
    fn int_is_not_float() {
        assert!(!ValueKind::Float.matches(&Value::Int(3)));
        assert!(!ValueKind::Int.matches(&Value::Float(3.0)));
    }

    #[test]
    fn containers() {
        assert!(Value::List(vec![]).is_container());
        assert!(Value::Map(Map::new()).is_container());
        assert!(!Value::from("[]").is_container());
    }

    #[test]
    fn map_from_pairs_keeps_order() {
        let v: Value = [("b", 1), ("a", 2)].into_iter().collect();
        let keys: Vec<_> = v.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn kind_deserializes_lowercase() {
        let kind: ValueKind = serde_json::from_str("\"timestamp\"").unwrap();
        assert_eq!(kind, ValueKind::DateTime);
        let kind: ValueKind = serde_json::from_str("\"list\"").unwrap();
        assert_eq!(kind, ValueKind::List);
    }
}
