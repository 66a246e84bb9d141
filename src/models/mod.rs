//! Models for the APICORE document
//!
//! Defines the typed document tree the rest of the crate operates on: the
//! aggregate [`ConfigDocument`], the five-kind parameter union, and the
//! response extraction descriptors.

pub mod document;
pub mod enums;
pub mod parameter;
pub mod response;

pub use document::{ConfigDocument, SUPPORTED_VERSION};
pub use enums::*;
pub use parameter::{ParameterSpec, ParameterValue};
pub use response::{DataGroup, DataItem, ImageSpec, ResponseSpec};

/// Error raised while reconstructing a typed document from persisted JSON.
///
/// Optional leaf fields are defaulted rather than failing; this error covers
/// the structural cases where guessing would be wrong.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not JSON, or a container or field has the wrong shape.
    #[error("malformed APICORE document: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter has no `type` tag at all.
    #[error("parameter {index} is missing its type tag")]
    MissingParameterKind { index: usize },

    /// A parameter's `type` tag is outside the closed set of kinds.
    #[error("parameter {index} has unknown type \"{tag}\"")]
    UnknownParameterKind { index: usize, tag: String },

    /// A parameter's `value` field does not match its declared kind.
    #[error("parameter {index} ({kind}): expected {expected}")]
    MismatchedParameterValue {
        index: usize,
        kind: ParameterKind,
        expected: &'static str,
    },

    /// A data item's `type` tag is neither `string` nor `list`.
    #[error("data item {item} in group {group} has unknown type \"{tag}\"")]
    UnknownDataItemType {
        group: usize,
        item: usize,
        tag: String,
    },
}
