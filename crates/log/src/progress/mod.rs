//! Progress logging for iterators and streams
//!
//! Wrapping a producer in [`TimedIterator`] (or [`TimedStream`]) leaves its
//! items untouched and logs, at the configured level:
//!
//! - `Started <label> at <time>` when the first item is requested
//! - `Fetched <n> <label> so far` every `interval` items
//! - `Ended <label> at <time>` once the producer is exhausted
//! - `Yielded <n> <label> in <elapsed>`, the summary, exactly once
//!
//! With `enabled = false` only the summary is written.

mod config;
mod iter;
#[cfg(feature = "async")]
mod stream;

pub use config::{DEFAULT_INTERVAL, DEFAULT_LABEL, ProgressConfig};
pub use iter::{TimedIterator, TimedIteratorExt, timed_generator};
#[cfg(feature = "async")]
pub use stream::{TimedStream, TimedStreamExt, timed_async_generator};

use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::Level;

/// Counter and clock shared by the iterator and stream wrappers.
#[derive(Debug)]
pub(crate) struct Tracker {
    label: String,
    interval: u64,
    level: Level,
    enabled: bool,
    count: u64,
    started: Option<Instant>,
    finished: bool,
}

impl Tracker {
    pub(crate) fn new(config: &ProgressConfig) -> Self {
        Self {
            label: config.effective_label().to_owned(),
            interval: config.effective_interval(),
            level: config.level,
            enabled: config.enabled,
            count: 0,
            started: None,
            finished: false,
        }
    }

    /// Starts the clock on first call; later calls do nothing.
    pub(crate) fn start(&mut self) {
        if self.started.is_some() {
            return;
        }
        self.started = Some(Instant::now());
        if self.enabled {
            crate::log_at!(
                self.level,
                label = %self.label,
                "Started {} at {}",
                self.label,
                rfc3339(Utc::now())
            );
        }
    }

    pub(crate) fn record(&mut self) {
        self.count += 1;
        if self.enabled && self.count % self.interval == 0 {
            crate::log_at!(
                self.level,
                label = %self.label,
                count = self.count,
                "Fetched {} {} so far",
                self.count,
                self.label
            );
        }
    }

    /// Writes the end and summary lines; later calls do nothing.
    pub(crate) fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let elapsed = self.elapsed();
        if self.enabled {
            crate::log_at!(
                self.level,
                label = %self.label,
                "Ended {} at {}",
                self.label,
                rfc3339(Utc::now())
            );
        }
        crate::log_at!(
            self.level,
            label = %self.label,
            count = self.count,
            elapsed_ms = elapsed.as_millis() as u64,
            "Yielded {} {} in {:?}",
            self.count,
            self.label,
            elapsed
        );
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |started| started.elapsed())
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Short name of a named function type, used as the default label of the
/// generator wrappers. Closures have no usable name and yield `None`.
pub(crate) fn factory_label<F>() -> Option<String> {
    let name = std::any::type_name::<F>();
    if name.contains("{{closure}}") {
        return None;
    }
    let mut depth = 0usize;
    let path: String = name
        .chars()
        .filter(|&c| match c {
            '<' => {
                depth += 1;
                false
            }
            '>' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .collect();
    path.rsplit("::")
        .next()
        .filter(|short| !short.is_empty())
        .map(str::to_owned)
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
