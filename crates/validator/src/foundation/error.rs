//! Error types for conversion, validation and path lookup failures
//!
//! [`ValidationError`] is the structured error returned by validators. All
//! string fields use `Cow<'static, str>` so the common case of static codes
//! and messages does not allocate.
//!
//! [`ConversionError`] and [`PathError`] are plain `thiserror` enums: the
//! pipeline only ever logs conversion errors, while path errors are handed
//! back to the caller of the extractor.

use crate::value::ValueKind;
use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use strata_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("type_mismatch", "Type mismatch")
///     .with_param("expected", "string")
///     .with_param("actual", "list");
/// assert_eq!(error.param("expected"), Some("string"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "type_mismatch", "rejected", "missing_expected_type"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, set when the value came out of a nested lookup.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, found {actual}"),
        )
        .with_param("expected", expected.as_str())
        .with_param("actual", actual.as_str())
    }

    /// Creates a "missing_expected_type" error.
    ///
    /// Returned by the type-membership check when no expected kind was given.
    pub fn missing_expected_type() -> Self {
        Self::new(
            "missing_expected_type",
            "No expected type to check membership against",
        )
    }

    /// Creates a "rejected" error, used when a predicate returns `false`.
    pub fn rejected(validator: impl Into<Cow<'static, str>>) -> Self {
        Self::new("rejected", "Value rejected by predicate").with_param("validator", validator)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVERSION ERROR
// ============================================================================

/// Why a converter could not produce a value.
///
/// The pipeline never surfaces these: it logs them and keeps the
/// pre-conversion value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The converter does not accept this kind of input.
    #[error("{converter} cannot convert a {found} value")]
    Unsupported {
        converter: &'static str,
        found: ValueKind,
    },

    /// A string did not match the given format.
    #[error("failed to parse {input:?} as {format:?}: {source}")]
    Format {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// None of the candidate formats matched.
    #[error("{input:?} matches none of the known formats")]
    NoMatchingFormat { input: String },

    /// Epoch seconds that cannot be represented as a datetime.
    #[error("{seconds} is not a representable epoch timestamp")]
    EpochOutOfRange { seconds: f64 },

    /// Epoch seconds that fall into a local-time gap or fold.
    #[error("{seconds} does not map to a single local time")]
    AmbiguousLocalTime { seconds: f64 },

    /// Two candidate formats parsed the same input to different datetimes.
    #[error("found conflicting timestamp: previous {previous}, current {current}")]
    Conflict {
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },

    /// Failure reported by a caller-supplied converter.
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl ConversionError {
    /// Creates a custom conversion error.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(message.into())
    }
}

// ============================================================================
// PATH ERROR
// ============================================================================

/// Why a path lookup failed. `depth` is the zero-based index of the segment
/// that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    /// The map has no such key.
    #[error("key {key:?} not found at depth {depth}")]
    MissingKey { key: String, depth: usize },

    /// The index is past either end of the list.
    #[error("index {index} out of range for list of length {len} at depth {depth}")]
    IndexOutOfRange { index: i64, len: usize, depth: usize },

    /// The segment cannot address the node (e.g. a key into a list).
    #[error("cannot look up {segment} in a {found} at depth {depth}")]
    InvalidSegment {
        segment: String,
        found: ValueKind,
        depth: usize,
    },
}

impl PathError {
    /// Returns the depth at which lookup failed.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            PathError::MissingKey { depth, .. }
            | PathError::IndexOutOfRange { depth, .. }
            | PathError::InvalidSegment { depth, .. } => *depth,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_type_mismatch_params() {
        let error = ValidationError::type_mismatch(ValueKind::String, ValueKind::List);
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.param("expected"), Some("string"));
        assert_eq!(error.param("actual"), Some("list"));
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::rejected("equals")
            .with_field("second/0");
        assert_eq!(
            error.to_string(),
            "[second/0] rejected: Value rejected by predicate (params: [validator=equals])"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::missing_expected_type();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_path_error_depth() {
        let error = PathError::MissingKey {
            key: "first".into(),
            depth: 2,
        };
        assert_eq!(error.depth(), 2);
        assert_eq!(error.to_string(), "key \"first\" not found at depth 2");
    }

    #[test]
    fn test_conversion_error_display() {
        let error = ConversionError::Unsupported {
            converter: "timestamp",
            found: ValueKind::Bool,
        };
        assert_eq!(error.to_string(), "timestamp cannot convert a bool value");
    }
}
