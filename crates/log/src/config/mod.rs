//! Configuration types
//!
//! - `base`: core configuration structs (Config, Format, Level)
//! - `writer`: writer and display configuration
//! - `presets`: pre-configured setups (environment, development, production, test)

mod base;
mod presets;
mod writer;

pub use base::{Config, Format, Level};
pub use writer::{DisplayConfig, WriterConfig};
