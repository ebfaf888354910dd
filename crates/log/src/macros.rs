//! Convenience macros for structured logging

/// Log at a level chosen at runtime.
///
/// `tracing` macros take their level as a constant, so a configured
/// [`Level`](crate::Level) has to be dispatched by hand.
///
/// ```rust
/// use strata_log::{Level, log_at};
///
/// let level = Level::Debug;
/// log_at!(level, count = 3, "Fetched {} items so far", 3);
/// ```
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            $crate::Level::Error => $crate::error!($($arg)+),
            $crate::Level::Warn => $crate::warn!($($arg)+),
            $crate::Level::Info => $crate::info!($($arg)+),
            $crate::Level::Debug => $crate::debug!($($arg)+),
            $crate::Level::Trace => $crate::trace!($($arg)+),
        }
    };
}
