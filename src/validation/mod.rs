//! Validation for APICORE documents
//!
//! Provides the pre-persist validation pass: a short-circuiting check that
//! reports the first violation in a fixed order, plus an accumulating
//! variant for surfaces that want the full list.

pub mod document;

pub use document::{SchemaViolation, validate, validate_all};
