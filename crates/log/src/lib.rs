//! # strata-log
//!
//! Logger setup on top of `tracing-subscriber`, plus progress logging for
//! long-running iterators and streams.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_log::prelude::*;
//!
//! // Installs for this thread only; `init_with` installs globally.
//! let _guard = strata_log::init_test()?;
//!
//! let rows: Vec<u32> = (0..3).timed(&ProgressConfig::new().label("rows")).collect();
//! info!(count = rows.len(), "done");
//! # Ok::<(), strata_log::LogError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod core;
mod format;
mod macros;
pub mod progress;
mod writer;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Level, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use format::LogTimer;
pub use progress::{ProgressConfig, TimedIterator, TimedIteratorExt, timed_generator};
#[cfg(feature = "async")]
pub use progress::{TimedStream, TimedStreamExt, timed_async_generator};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Level, LogResult, ProgressConfig, TimedIteratorExt, auto_init, debug, error, info, init,
        init_with, trace, warn,
    };

    #[cfg(feature = "async")]
    pub use crate::TimedStreamExt;

    pub use tracing::{Span, field};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
///
/// `STRATA_LOG` or `RUST_LOG` in the environment selects
/// [`Config::from_env`]; otherwise debug builds get
/// [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var("STRATA_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests: [`Config::test`], scoped to the current thread
pub fn init_test() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::test()).build_scoped()
}
