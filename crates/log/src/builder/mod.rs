//! Logger builder implementation
//!
//! - `format`: format layer creation macros

#[macro_use]
mod format;

use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};
use crate::format::make_timer;
use crate::writer;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// A globally installed logger lives for the rest of the process; a scoped
/// one (see [`LoggerBuilder::build_scoped`]) is uninstalled when the guard
/// drops.
#[must_use = "dropping the guard uninstalls a scoped logger"]
pub struct LoggerGuard {
    /// RAII guard; field must exist even if never accessed directly
    #[allow(dead_code)]
    scope: Option<DefaultGuard>,
}

impl LoggerGuard {
    /// Returns true if this guard owns a thread-local logger.
    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("scoped", &self.is_scoped())
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the logger as the global default
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - Writer or time format configuration is invalid
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<LoggerGuard> {
        self.install(false)
    }

    /// Build and install the logger for the current thread only
    ///
    /// The logger is active until the returned guard drops.
    pub fn build_scoped(self) -> LogResult<LoggerGuard> {
        self.install(true)
    }

    fn install(self, scoped: bool) -> LogResult<LoggerGuard> {
        let config = self.config;

        let filter = EnvFilter::try_new(&config.level)
            .map_err(|e| LogError::filter(&config.level, e))?;
        let writer = writer::make_writer(&config.writer)?;
        let timer = make_timer(config.display.time, config.display.time_format.as_deref())?;
        let display = &config.display;

        match config.format {
            Format::Pretty => {
                install_layer!(create_fmt_layer!(pretty, display, writer), timer, filter, scoped)
            }
            Format::Compact => {
                install_layer!(create_fmt_layer!(compact, display, writer), timer, filter, scoped)
            }
            Format::Json => {
                install_layer!(create_json_layer!(display, writer), timer, filter, scoped)
            }
        }
    }
}

fn install<L>(filter: EnvFilter, layer: L, scoped: bool) -> LogResult<LoggerGuard>
where
    L: Layer<Layered<EnvFilter, Registry>> + Send + Sync + 'static,
{
    let subscriber = Registry::default().with(filter).with(layer);
    if scoped {
        Ok(LoggerGuard {
            scope: Some(subscriber.set_default()),
        })
    } else {
        subscriber
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;
        Ok(LoggerGuard { scope: None })
    }
}
