//! Change detection between the live document and its last persisted form.
//!
//! Comparison happens on the canonical serialization: compact JSON with
//! object keys sorted. Array order is significant, so the same parameters in
//! a different order count as a change. Anything that stops the comparison
//! (an unreadable or unparseable snapshot) also counts as changed, so the
//! caller errs toward prompting for a save rather than silently dropping
//! edits.

use crate::models::ConfigDocument;

/// Whether `current` differs from the last persisted snapshot.
///
/// With no snapshot (a never-saved document), the document counts as changed
/// as soon as it holds anything worth saving: a non-empty name, intro, icon
/// or link, any parameter, or any data group.
pub fn has_changes(current: &ConfigDocument, persisted_json: Option<&str>) -> bool {
    match persisted_json {
        None => !is_blank(current),
        Some(text) => match (current.to_canonical_json(), canonicalize(text)) {
            (Ok(current), Ok(persisted)) => current != persisted,
            // Fail open: a snapshot that cannot be compared is treated as
            // changed.
            _ => true,
        },
    }
}

/// Re-serialize persisted JSON text into the canonical comparison form.
fn canonicalize(text: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text).map(|value| value.to_string())
}

fn is_blank(doc: &ConfigDocument) -> bool {
    doc.friendly_name.is_empty()
        && doc.intro.is_empty()
        && doc.icon.is_empty()
        && doc.link.is_empty()
        && doc.parameters.is_empty()
        && doc.response.data_groups.is_empty()
}
