//! Progress logging configuration

use serde::{Deserialize, Serialize};

use crate::config::Level;

/// Label used when none is configured and none can be derived from a
/// wrapped function's name.
pub const DEFAULT_LABEL: &str = "items";

/// Items between two "so far" lines when none is configured.
pub const DEFAULT_INTERVAL: u64 = 10_000;

/// How a wrapped iterator or stream reports its progress.
///
/// # Examples
///
/// ```
/// use strata_log::{Level, ProgressConfig};
///
/// let config: ProgressConfig = serde_json::from_str(r#"{"label": "rows", "interval": 500}"#).unwrap();
/// assert!(config.enabled);
/// assert_eq!(config.effective_label(), "rows");
/// assert_eq!(config.level, Level::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Log start, periodic and end lines. The summary is logged regardless.
    pub enabled: bool,
    /// Noun used in every line; [`DEFAULT_LABEL`] when unset.
    pub label: Option<String>,
    /// Items between two periodic lines. Zero is treated as one.
    pub interval: u64,
    /// Level of every line.
    pub level: Level,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: None,
            interval: DEFAULT_INTERVAL,
            level: Level::Info,
        }
    }
}

impl ProgressConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the summary line will be written.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Keeps an explicit label, otherwise takes `label` when there is one.
    #[must_use]
    pub(crate) fn or_label(mut self, label: Option<&str>) -> Self {
        if self.label.is_none() {
            self.label = label.map(str::to_owned);
        }
        self
    }

    /// The configured label, or [`DEFAULT_LABEL`].
    #[must_use]
    pub fn effective_label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    /// The configured interval, at least one.
    #[must_use]
    pub fn effective_interval(&self) -> u64 {
        self.interval.max(1)
    }
}
