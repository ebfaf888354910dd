//! Prelude module for convenient imports.
//!
//! `use strata_validator::prelude::*;` brings in the value model, the
//! capability traits, the pipeline and the path extractor.

// ============================================================================
// FOUNDATION: Core traits, errors, options
// ============================================================================

pub use crate::foundation::{
    CoerceOptions, ConversionError, Convert, PathError, PostProcess, Validate, ValidationError,
};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{Map, Value, ValueKind};

// ============================================================================
// CONVERTERS AND VALIDATORS
// ============================================================================

pub use crate::converters::{
    Disambiguation, Identity, SequenceConverter, TimeFormat, TimestampConverter, TimestampParser,
    convert_to_sequence, convert_to_timestamp, from_fn,
};
pub use crate::validators::{
    Equals, KindOf, NotEmpty, NotNull, OneOf, Predicate, TypeCheck, equals, kind_of, not_empty,
    not_null, one_of, predicate,
};

// ============================================================================
// PIPELINE AND PATHS
// ============================================================================

pub use crate::path;
pub use crate::path::{PathSegment, extract_path};
pub use crate::pipeline::{Coercion, coerce_and_validate};
pub use crate::registry::ConverterRegistry;
