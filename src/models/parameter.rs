//! Parameter model: the five-kind tagged union and its flat wire form.
//!
//! On disk a parameter is a flat record carrying every kind-specific field,
//! with the fields irrelevant to the current kind set to null. In memory only
//! the live kind's fields exist; see [`ParameterValue`].

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::DocumentError;
use super::enums::ParameterKind;

/// Kind-specific payload of a [`ParameterSpec`].
///
/// Exactly one variant is live at a time. Switching kinds resets the payload
/// to the new kind's defaults; nothing from the previous kind is preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Bounded integer with a default value.
    Integer {
        min_value: i64,
        max_value: i64,
        value: i64,
    },
    /// On/off flag.
    Boolean { value: bool },
    /// Multiple values, joined with `split_str` when the request is built.
    List { split_str: String, value: Vec<String> },
    /// Free-form text.
    String { value: String },
    /// Closed set of machine values plus display labels of the same length.
    Enum {
        enum_values: Vec<String>,
        friendly_values: Vec<String>,
    },
}

impl ParameterValue {
    /// Default payload for `kind`, matching what the editing surface offers
    /// for a freshly switched parameter.
    pub fn defaults_for(kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::Integer => ParameterValue::Integer {
                min_value: 0,
                max_value: 100,
                value: 0,
            },
            ParameterKind::Boolean => ParameterValue::Boolean { value: false },
            ParameterKind::List => ParameterValue::List {
                split_str: String::new(),
                value: Vec::new(),
            },
            ParameterKind::String => ParameterValue::String {
                value: String::new(),
            },
            ParameterKind::Enum => ParameterValue::Enum {
                enum_values: Vec::new(),
                friendly_values: Vec::new(),
            },
        }
    }

    /// The discriminant this payload belongs to.
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Integer { .. } => ParameterKind::Integer,
            ParameterValue::Boolean { .. } => ParameterKind::Boolean,
            ParameterValue::List { .. } => ParameterKind::List,
            ParameterValue::String { .. } => ParameterKind::String,
            ParameterValue::Enum { .. } => ParameterKind::Enum,
        }
    }
}

/// A single API request parameter.
///
/// The `enabled` flag and the kind-specific payload sit behind accessors
/// because they carry cross-field rules: enum parameters are always enabled,
/// and changing kinds truncates the payload to the new kind's defaults.
/// Parameters have no identifier of their own; identity is the position in
/// the owning document's list.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Machine key sent in the request. May stay blank while editing.
    pub name: String,
    /// Display name. Must be non-empty for the document to validate.
    pub friendly_name: String,
    /// Whether the request requires this parameter.
    pub required: bool,
    enabled: bool,
    value: ParameterValue,
}

impl Default for ParameterSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            friendly_name: String::new(),
            required: true,
            enabled: true,
            value: ParameterValue::defaults_for(ParameterKind::String),
        }
    }
}

impl ParameterSpec {
    /// New parameter with the creation defaults: kind `string`, empty value,
    /// required and enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> ParameterKind {
        self.value.kind()
    }

    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    /// Switch the parameter to `kind`, resetting the kind-specific fields to
    /// that kind's defaults. `name`, `friendly_name` and `required` are left
    /// untouched. An enum parameter comes out enabled regardless of the
    /// previous state.
    pub fn set_kind(&mut self, kind: ParameterKind) {
        self.value = ParameterValue::defaults_for(kind);
        if kind == ParameterKind::Enum {
            self.enabled = true;
        }
    }

    /// Replace the payload. A payload of a different kind switches the
    /// parameter's kind, under the same rule as [`ParameterSpec::set_kind`].
    pub fn set_value(&mut self, value: ParameterValue) {
        if value.kind() == ParameterKind::Enum {
            self.enabled = true;
        }
        self.value = value;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enum parameters are always enabled; the flag is only editable for the
    /// other kinds.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.kind() != ParameterKind::Enum {
            self.enabled = enabled;
        }
    }

    /// Label used in validation messages: the machine name when set,
    /// otherwise the display name.
    pub(crate) fn label(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.friendly_name.is_empty() {
            &self.friendly_name
        } else {
            "unnamed"
        }
    }
}

impl Serialize for ParameterSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ParameterWire::from_spec(self).serialize(serializer)
    }
}

/// Flat on-disk form of a parameter. Field names and their order are part of
/// the wire contract; fields irrelevant to the current kind are null.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ParameterWire {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub friendly_value: Vec<String>,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub min_value: Option<i64>,
    #[serde(default)]
    pub max_value: Option<i64>,
    #[serde(default)]
    pub split_str: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ParameterWire {
    pub(crate) fn from_spec(spec: &ParameterSpec) -> Self {
        let (value, friendly_value, min_value, max_value, split_str) = match spec.value() {
            ParameterValue::Integer {
                min_value,
                max_value,
                value,
            } => (
                Value::from(*value),
                Vec::new(),
                Some(*min_value),
                Some(*max_value),
                None,
            ),
            ParameterValue::Boolean { value } => (Value::from(*value), Vec::new(), None, None, None),
            ParameterValue::List { split_str, value } => (
                Value::from(value.clone()),
                Vec::new(),
                None,
                None,
                Some(split_str.clone()),
            ),
            ParameterValue::String { value } => {
                (Value::from(value.clone()), Vec::new(), None, None, None)
            }
            ParameterValue::Enum {
                enum_values,
                friendly_values,
            } => (
                Value::from(enum_values.clone()),
                friendly_values.clone(),
                None,
                None,
                None,
            ),
        };
        Self {
            enable: spec.enabled(),
            name: spec.name.clone(),
            kind: Some(spec.kind().as_str().to_string()),
            required: spec.required,
            value,
            friendly_value,
            friendly_name: spec.friendly_name.clone(),
            min_value,
            max_value,
            split_str,
        }
    }

    /// Rebuild the typed parameter, defaulting absent leaves the way the
    /// editing surface would. `index` only labels errors.
    pub(crate) fn into_spec(self, index: usize) -> Result<ParameterSpec, DocumentError> {
        let tag = self
            .kind
            .ok_or(DocumentError::MissingParameterKind { index })?;
        let kind = ParameterKind::parse(&tag)
            .ok_or(DocumentError::UnknownParameterKind { index, tag })?;

        let value = match kind {
            ParameterKind::Integer => ParameterValue::Integer {
                min_value: self.min_value.unwrap_or(0),
                max_value: self.max_value.unwrap_or(100),
                value: int_value(self.value, index)?,
            },
            ParameterKind::Boolean => ParameterValue::Boolean {
                value: bool_value(self.value, index)?,
            },
            ParameterKind::List => ParameterValue::List {
                split_str: self.split_str.unwrap_or_default(),
                value: string_list(self.value, index, kind)?,
            },
            ParameterKind::String => ParameterValue::String {
                value: string_value(self.value, index)?,
            },
            ParameterKind::Enum => ParameterValue::Enum {
                enum_values: string_list(self.value, index, kind)?,
                friendly_values: self.friendly_value,
            },
        };

        Ok(ParameterSpec {
            name: self.name,
            friendly_name: self.friendly_name,
            required: self.required,
            // Enum parameters are enabled no matter what the file says.
            enabled: kind == ParameterKind::Enum || self.enable,
            value,
        })
    }
}

fn int_value(value: Value, index: usize) -> Result<i64, DocumentError> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n.as_i64().ok_or(DocumentError::MismatchedParameterValue {
            index,
            kind: ParameterKind::Integer,
            expected: "an integer value",
        }),
        _ => Err(DocumentError::MismatchedParameterValue {
            index,
            kind: ParameterKind::Integer,
            expected: "an integer value",
        }),
    }
}

fn bool_value(value: Value, index: usize) -> Result<bool, DocumentError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        _ => Err(DocumentError::MismatchedParameterValue {
            index,
            kind: ParameterKind::Boolean,
            expected: "a boolean value",
        }),
    }
}

fn string_value(value: Value, index: usize) -> Result<String, DocumentError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        _ => Err(DocumentError::MismatchedParameterValue {
            index,
            kind: ParameterKind::String,
            expected: "a string value",
        }),
    }
}

fn string_list(value: Value, index: usize, kind: ParameterKind) -> Result<Vec<String>, DocumentError> {
    let mismatch = || DocumentError::MismatchedParameterValue {
        index,
        kind,
        expected: "a list of strings",
    };
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(s) => Ok(s),
                _ => Err(mismatch()),
            })
            .collect(),
        _ => Err(mismatch()),
    }
}
