//! # strata-validator
//!
//! Coerce, validate and default values pulled out of untyped nested data.
//!
//! ## Quick Start
//!
//! ```
//! use strata_validator::prelude::*;
//!
//! let source: Value = [("tags", "a;b;c")].into_iter().collect();
//! let tags = Coercion::expect(ValueKind::List).separator(";");
//!
//! let out = extract_path(&source, &path!["tags"], Some(&tags)).unwrap();
//! assert_eq!(out, Value::strings(["a", "b", "c"]));
//! ```
//!
//! ## Pieces
//!
//! - [`value`]: the dynamic [`Value`](value::Value) model and its JSON interop
//! - [`converters`]: string splitting and timestamp parsing
//! - [`validators`]: the default type-membership check and a few value checks
//! - [`registry`]: which converter runs for which expected kind
//! - [`pipeline`]: convert, validate, fall back to a default
//! - [`path`]: nested lookup that hands its result to a post-processor

// ValidationError is the error type of every validator; boxing it would add
// an indirection to each call.
#![allow(clippy::result_large_err)]

pub mod converters;
pub mod foundation;
mod macros;
pub mod path;
pub mod pipeline;
pub mod prelude;
pub mod registry;
pub mod validators;
pub mod value;

pub use converters::{convert_to_sequence, convert_to_timestamp};
pub use path::extract_path;
pub use pipeline::coerce_and_validate;
