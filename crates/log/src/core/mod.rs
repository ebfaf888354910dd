//! Core types shared by the builder and the writers.

pub mod error;

pub use error::{LogError, LogResult};
