//! Built-in validators
//!
//! - [`TypeCheck`]: type membership against the expected kind, the pipeline default
//! - [`KindOf`]: type membership against a fixed kind
//! - [`Predicate`] / [`predicate`]: accept when a closure returns `true`
//! - [`NotNull`], [`NotEmpty`], [`Equals`], [`OneOf`]: value checks
//!
//! # Examples
//!
//! ```
//! use strata_validator::foundation::{CoerceOptions, Validate};
//! use strata_validator::validators::{TypeCheck, equals};
//! use strata_validator::value::{Value, ValueKind};
//!
//! let options = CoerceOptions::default();
//! assert!(TypeCheck.validate(&Value::from("x"), Some(ValueKind::String), &options).is_ok());
//! assert!(TypeCheck.validate(&Value::from("x"), None, &options).is_err());
//! assert!(equals("blah").validate(&Value::from("blah"), None, &options).is_ok());
//! ```

pub mod predicate;
pub mod type_check;
pub mod value;

pub use predicate::{Predicate, predicate};
pub use type_check::{KindOf, TypeCheck, kind_of};
pub use value::{Equals, NotEmpty, NotNull, OneOf, equals, not_empty, not_null, one_of};
