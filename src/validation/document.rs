//! Document validation: the ordered rule list run before persist or preview.
//!
//! The check order is part of the contract. Callers display the first
//! violation, so two runs over the same document must always surface the
//! same reason. Checks run in this order:
//!
//! 1. schema version
//! 2. endpoint link
//! 3. document name
//! 4. each parameter in display order (bounds, enum lists, display name)
//! 5. image path, for non-binary images
//!
//! Structural rules (unknown kinds, missing type tags, null split strings)
//! cannot occur on a constructed [`ConfigDocument`]; they are rejected
//! earlier, when a persisted document is parsed.

use thiserror::Error;

use crate::models::enums::ImageContentType;
use crate::models::{ConfigDocument, ParameterSpec, ParameterValue, SUPPORTED_VERSION};

/// A semantic rule the document breaks. Never fatal and never auto-corrected;
/// the caller decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// `APICORE_version` is not the supported value.
    #[error("unsupported APICORE version \"{found}\", expected \"1.0\"")]
    UnsupportedVersion { found: String },

    /// The endpoint link is empty.
    #[error("missing API endpoint link")]
    MissingLink,

    /// The document has no display name.
    #[error("missing API name")]
    MissingName,

    /// Integer parameter with `min_value` above `max_value`.
    #[error("parameter \"{parameter}\": minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        parameter: String,
        min: i64,
        max: i64,
    },

    /// Integer parameter whose value escapes its bounds.
    #[error("parameter \"{parameter}\": value {value} is outside {min}..={max}")]
    ValueOutOfRange {
        parameter: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Enum parameter with no display labels.
    #[error("parameter \"{parameter}\": enum friendly value list is empty")]
    MissingFriendlyValues { parameter: String },

    /// Enum parameter with no machine values.
    #[error("parameter \"{parameter}\": enum value list is empty")]
    MissingEnumValues { parameter: String },

    /// Enum parameter whose label and value lists differ in length.
    #[error("parameter \"{parameter}\": {labels} friendly values for {values} enum values")]
    EnumLengthMismatch {
        parameter: String,
        values: usize,
        labels: usize,
    },

    /// Parameter with no display name.
    #[error("parameter \"{parameter}\": missing friendly name")]
    MissingParameterName { parameter: String },

    /// URL-delivered image with no extraction path.
    #[error("missing image path for a URL response image")]
    MissingImagePath,
}

/// Check `doc` against the schema rules, reporting the first violation in
/// the fixed order above.
///
/// Pure: reads the document snapshot and nothing else.
#[must_use = "a failed validation must prevent the document from being persisted"]
pub fn validate(doc: &ConfigDocument) -> Result<(), SchemaViolation> {
    if doc.schema_version != SUPPORTED_VERSION {
        return Err(SchemaViolation::UnsupportedVersion {
            found: doc.schema_version.clone(),
        });
    }
    if doc.link.is_empty() {
        return Err(SchemaViolation::MissingLink);
    }
    if doc.friendly_name.is_empty() {
        return Err(SchemaViolation::MissingName);
    }
    for spec in &doc.parameters {
        if let Some(violation) = parameter_violations(spec).into_iter().next() {
            return Err(violation);
        }
    }
    if let Some(violation) = image_violation(doc) {
        return Err(violation);
    }
    Ok(())
}

/// Accumulating variant: every violation in `doc`, in check order.
#[must_use = "a failed validation must prevent the document from being persisted"]
pub fn validate_all(doc: &ConfigDocument) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    if doc.schema_version != SUPPORTED_VERSION {
        violations.push(SchemaViolation::UnsupportedVersion {
            found: doc.schema_version.clone(),
        });
    }
    if doc.link.is_empty() {
        violations.push(SchemaViolation::MissingLink);
    }
    if doc.friendly_name.is_empty() {
        violations.push(SchemaViolation::MissingName);
    }
    for spec in &doc.parameters {
        violations.extend(parameter_violations(spec));
    }
    violations.extend(image_violation(doc));
    violations
}

/// Violations on a single parameter, in check order.
fn parameter_violations(spec: &ParameterSpec) -> Vec<SchemaViolation> {
    let label = spec.label();
    let mut violations = Vec::new();
    match spec.value() {
        ParameterValue::Integer {
            min_value,
            max_value,
            value,
        } => {
            if min_value > max_value {
                violations.push(SchemaViolation::InvertedBounds {
                    parameter: label.to_string(),
                    min: *min_value,
                    max: *max_value,
                });
            }
            if value > max_value || value < min_value {
                violations.push(SchemaViolation::ValueOutOfRange {
                    parameter: label.to_string(),
                    value: *value,
                    min: *min_value,
                    max: *max_value,
                });
            }
        }
        ParameterValue::Enum {
            enum_values,
            friendly_values,
        } => {
            if friendly_values.is_empty() {
                violations.push(SchemaViolation::MissingFriendlyValues {
                    parameter: label.to_string(),
                });
            }
            if enum_values.is_empty() {
                violations.push(SchemaViolation::MissingEnumValues {
                    parameter: label.to_string(),
                });
            }
            if friendly_values.len() != enum_values.len() {
                violations.push(SchemaViolation::EnumLengthMismatch {
                    parameter: label.to_string(),
                    values: enum_values.len(),
                    labels: friendly_values.len(),
                });
            }
        }
        // Boolean, list and string carry no kind-specific rules: the list
        // split string exists by construction.
        ParameterValue::Boolean { .. }
        | ParameterValue::List { .. }
        | ParameterValue::String { .. } => {}
    }
    if spec.friendly_name.is_empty() {
        violations.push(SchemaViolation::MissingParameterName {
            parameter: label.to_string(),
        });
    }
    violations
}

fn image_violation(doc: &ConfigDocument) -> Option<SchemaViolation> {
    let image = &doc.response.image;
    (image.content_type != ImageContentType::Binary && image.path.is_empty())
        .then_some(SchemaViolation::MissingImagePath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_blank_document_fails_on_the_link_first() {
        let doc = ConfigDocument::new();
        assert_eq!(validate(&doc), Err(SchemaViolation::MissingLink));
    }

    #[test]
    fn violation_messages_name_the_parameter() {
        let mut doc = ConfigDocument::new();
        doc.friendly_name = "API".to_string();
        doc.link = "https://example.com".to_string();
        doc.response.image.path = "$.url".to_string();
        let spec = doc.add_parameter();
        spec.name = "style".to_string();
        spec.set_value(ParameterValue::Enum {
            enum_values: vec!["a".to_string()],
            friendly_values: Vec::new(),
        });

        let violation = validate(&doc).unwrap_err();
        assert!(violation.to_string().contains("style"));
    }
}
