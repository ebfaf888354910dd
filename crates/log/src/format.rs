//! Timestamp rendering for the fmt layers

use chrono::format::{Item, StrftimeItems};
use chrono::{SecondsFormat, Utc};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::core::{LogError, LogResult};

/// UTC wall-clock timer, RFC 3339 by default or a custom strftime format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTimer {
    Rfc3339,
    Custom(String),
}

impl FormatTime for LogTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = Utc::now();
        match self {
            LogTimer::Rfc3339 => w.write_str(&now.to_rfc3339_opts(SecondsFormat::Micros, true)),
            LogTimer::Custom(format) => write!(w, "{}", now.format(format)),
        }
    }
}

/// Create the timer for a display configuration.
///
/// Returns `None` when timestamps are disabled. A custom format is checked
/// up front; a bad specifier would otherwise surface on every event.
pub fn make_timer(enabled: bool, format: Option<&str>) -> LogResult<Option<LogTimer>> {
    if !enabled {
        return Ok(None);
    }
    match format {
        None => Ok(Some(LogTimer::Rfc3339)),
        Some(format) if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) => Err(
            LogError::Config(format!("invalid time format '{format}'")),
        ),
        Some(format) => Ok(Some(LogTimer::Custom(format.to_owned()))),
    }
}
