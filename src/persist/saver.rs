//! Writing APICORE documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{FALLBACK_EXTENSION, PREFERRED_EXTENSION, PersistError};
use crate::models::ConfigDocument;
use crate::validation;

/// Validate and write `doc` to `path`, returning the path actually written.
///
/// Validation runs first; a violation aborts the save before any bytes
/// reach the filesystem. A target with neither accepted extension gets
/// `.api.json` appended, mirroring the save-dialog convention.
pub fn save_document(path: &Path, doc: &ConfigDocument) -> Result<PathBuf, PersistError> {
    validation::validate(doc)?;
    let path = ensure_extension(path);
    let json = doc.to_json_string()?;
    fs::write(&path, json)?;
    info!("saved document to {}", path.display());
    Ok(path)
}

/// Append the preferred `.api.json` extension unless the path already ends
/// with an accepted one.
pub fn ensure_extension(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    if text.ends_with(&format!(".{PREFERRED_EXTENSION}"))
        || text.ends_with(&format!(".{FALLBACK_EXTENSION}"))
    {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{text}.{PREFERRED_EXTENSION}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_appended_only_when_missing() {
        assert_eq!(
            ensure_extension(Path::new("wallpapers")),
            PathBuf::from("wallpapers.api.json")
        );
        assert_eq!(
            ensure_extension(Path::new("wallpapers.api.json")),
            PathBuf::from("wallpapers.api.json")
        );
        assert_eq!(
            ensure_extension(Path::new("wallpapers.json")),
            PathBuf::from("wallpapers.json")
        );
        assert_eq!(
            ensure_extension(Path::new("wallpapers.txt")),
            PathBuf::from("wallpapers.txt.api.json")
        );
    }
}
