//! Integration tests for strata-validator.

mod coercion;
mod extraction;
mod json;
mod properties;
mod timestamps;
