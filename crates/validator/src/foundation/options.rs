//! Options forwarded to converters and validators

use serde::{Deserialize, Serialize};

/// Separator used by the sequence converter when none is configured.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Named, typed options recognised by the built-in converters.
///
/// The same record is handed to the converter and then to the validator of a
/// coercion, so custom implementations can read it too.
///
/// # Examples
///
/// ```
/// use strata_validator::foundation::CoerceOptions;
///
/// let options = CoerceOptions::default().with_separator(";");
/// assert_eq!(options.separator(), ";");
/// assert_eq!(options.format(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoerceOptions {
    /// Separator for string-to-list conversion. `None` or empty means `","`.
    pub separator: Option<String>,

    /// Explicit strftime-style format for string-to-datetime conversion.
    pub format: Option<String>,
}

impl CoerceOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Effective separator, falling back to [`DEFAULT_SEPARATOR`].
    #[must_use]
    pub fn separator(&self) -> &str {
        match self.separator.as_deref() {
            Some(sep) if !sep.is_empty() => sep,
            _ => DEFAULT_SEPARATOR,
        }
    }

    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_separator_falls_back() {
        let options = CoerceOptions::default().with_separator("");
        assert_eq!(options.separator(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn unknown_option_names_are_rejected() {
        let err = serde_json::from_str::<CoerceOptions>(r#"{"seperator": ";"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn options_deserialize() {
        let options: CoerceOptions =
            serde_json::from_str(r#"{"separator": "|", "format": "%Y"}"#).unwrap();
        assert_eq!(options.separator(), "|");
        assert_eq!(options.format(), Some("%Y"));
    }
}
