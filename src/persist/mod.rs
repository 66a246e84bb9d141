//! File persistence for APICORE documents
//!
//! The narrow file-facing contract the surrounding editor calls through:
//! read a `*.api.json` document, write one back (gated on validation),
//! locate the default document directory, and compare a live document
//! against the file it was loaded from. All file I/O in the crate lives
//! here; the model, validation and change-detection modules stay pure.

pub mod loader;
pub mod saver;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::changes;
use crate::models::{ConfigDocument, DocumentError};
use crate::validation::SchemaViolation;

pub use loader::load_document;
pub use saver::{ensure_extension, save_document};

/// Preferred extension for APICORE documents.
pub const PREFERRED_EXTENSION: &str = "api.json";
/// Also accepted when opening or saving.
pub const FALLBACK_EXTENSION: &str = "json";

/// Error while reading or writing a document file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a well-formed APICORE document.
    #[error(transparent)]
    Malformed(#[from] DocumentError),

    /// The document failed validation; nothing was written.
    #[error("document failed validation: {0}")]
    Invalid(#[from] SchemaViolation),
}

/// Default directory for opening and saving documents: the consuming
/// application's configuration folder, falling back to the directory of the
/// running executable when that folder does not exist.
pub fn default_document_dir() -> Option<PathBuf> {
    let config = dirs::config_dir().map(|dir| dir.join("wallpaper-generator-next").join("EnterPoint"));
    if let Some(dir) = config
        && dir.is_dir()
    {
        return Some(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.is_dir())
}

/// Whether `current` differs from what is on disk at `persisted`.
///
/// `None` means the document has never been saved. Read failures count as
/// changed, the same fail-open rule as [`changes::has_changes`].
pub fn has_unsaved_changes(current: &ConfigDocument, persisted: Option<&Path>) -> bool {
    match persisted {
        None => changes::has_changes(current, None),
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => changes::has_changes(current, Some(&text)),
            Err(err) => {
                warn!("could not read {} for comparison: {err}", path.display());
                true
            }
        },
    }
}
