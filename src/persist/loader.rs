//! Loading APICORE documents from disk.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::PersistError;
use crate::models::ConfigDocument;
use crate::validation;

/// Read and parse the document at `path`.
///
/// A document that parses but breaks a schema rule still loads, so the
/// caller can fix it in place; the violation is only logged here.
pub fn load_document(path: &Path) -> Result<ConfigDocument, PersistError> {
    let text = fs::read_to_string(path)?;
    let doc = ConfigDocument::from_json_str(&text)?;
    if let Err(violation) = validation::validate(&doc) {
        warn!(
            "{}: loaded with a schema violation: {violation}",
            path.display()
        );
    }
    info!("loaded document from {}", path.display());
    Ok(doc)
}
