//! Core traits, errors and options of the coercion pipeline
//!
//! - **Traits**: [`Convert`], [`Validate`], [`PostProcess`]
//! - **Errors**: [`ValidationError`], [`ConversionError`], [`PathError`]
//! - **Options**: [`CoerceOptions`]

pub mod error;
pub mod options;
pub mod traits;

pub use error::{ConversionError, PathError, ValidationError};
pub use options::{CoerceOptions, DEFAULT_SEPARATOR};
pub use traits::{Convert, PostProcess, Validate};
