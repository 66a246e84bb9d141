//! APICORE configuration core - model, validation and persistence for
//! APICORE API integration documents
//!
//! Provides the building blocks the surrounding editor calls through:
//! - Typed document model (request parameters, response extraction rules)
//! - Validation logic (short-circuiting, with an accumulating variant)
//! - Canonical serialization and unsaved-change detection
//! - File persistence under the `*.api.json` conventions

pub mod changes;
#[cfg(feature = "cli")]
pub mod cli;
pub mod models;
pub mod persist;
pub mod validation;

// Re-export commonly used types
pub use changes::has_changes;
pub use models::enums::{DataItemType, HttpMethod, ImageContentType, ParameterKind};
pub use models::{
    ConfigDocument, DataGroup, DataItem, DocumentError, ImageSpec, ParameterSpec, ParameterValue,
    ResponseSpec, SUPPORTED_VERSION,
};
pub use persist::{
    PersistError, default_document_dir, has_unsaved_changes, load_document, save_document,
};
pub use validation::{SchemaViolation, validate, validate_all};
