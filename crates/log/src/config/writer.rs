//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "writers", rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
    /// Write every event to each of the destinations
    Multi(Vec<WriterConfig>),
}

/// Display configuration
///
/// Independent toggles that map directly onto config files and env vars.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Custom time format (strftime), rendered in UTC. RFC 3339 when unset.
    pub time_format: Option<String>,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            time_format: None,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: cfg!(feature = "ansi") && std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Parse display configuration from environment variables
    pub(super) fn parse_env(&mut self) {
        if let Ok(v) = std::env::var("STRATA_LOG_TIME") {
            self.time = v != "0" && v != "false";
        }
        if let Ok(v) = std::env::var("STRATA_LOG_SOURCE") {
            self.source = v != "0" && v != "false";
        }
        if let Ok(v) = std::env::var("STRATA_LOG_COLORS") {
            self.colors = v != "0" && v != "false";
        }
        if let Ok(v) = std::env::var("STRATA_LOG_TIME_FORMAT") {
            self.time_format = Some(v).filter(|f| !f.is_empty());
        }
    }
}
