//! Writer implementations

use std::io;

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use crate::config::WriterConfig;
use crate::core::{LogError, LogResult};

/// Create a writer from configuration
///
/// `Multi` tees every event into each destination, in order.
pub fn make_writer(config: &WriterConfig) -> LogResult<BoxMakeWriter> {
    let writer = match config {
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
        WriterConfig::Multi(writers) => {
            let mut writers = writers.iter();
            let first = writers.next().ok_or_else(|| {
                LogError::Config("Multi writer needs at least one writer".to_string())
            })?;
            writers.try_fold(make_writer(first)?, |tee, next| {
                Ok::<_, LogError>(BoxMakeWriter::new(tee.and(make_writer(next)?)))
            })?
        }
    };

    Ok(writer)
}
