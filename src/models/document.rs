//! The aggregate APICORE document and its persisted JSON form.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DocumentError;
use super::enums::HttpMethod;
use super::parameter::{ParameterSpec, ParameterWire};
use super::response::{ResponseSpec, ResponseWire};

/// The only schema version this crate reads and writes.
pub const SUPPORTED_VERSION: &str = "1.0";

/// One APICORE configuration: endpoint identity, request parameters, and
/// response extraction rules.
///
/// The document owns its parameter list and response tree outright; nothing
/// in the tree is shared. Parameters are identified by position, so removing
/// one shifts everything after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    /// Schema version tag (`APICORE_version` on disk). Anything other than
    /// [`SUPPORTED_VERSION`] fails validation.
    pub schema_version: String,
    /// Display name of the API integration.
    pub friendly_name: String,
    /// Free-text description.
    pub intro: String,
    /// Icon URL or embedded data URI.
    pub icon: String,
    /// Target endpoint URL.
    pub link: String,
    /// HTTP method used against `link` (`func` on disk).
    pub method: HttpMethod,
    /// Request parameters in display order.
    pub parameters: Vec<ParameterSpec>,
    /// Response extraction rules.
    pub response: ResponseSpec,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_VERSION.to_string(),
            friendly_name: String::new(),
            intro: String::new(),
            icon: String::new(),
            link: String::new(),
            method: HttpMethod::Get,
            parameters: Vec::new(),
            response: ResponseSpec::new(),
        }
    }
}

impl ConfigDocument {
    /// Blank document, as presented for a newly created file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh `string` parameter and hand it back for editing.
    pub fn add_parameter(&mut self) -> &mut ParameterSpec {
        self.parameters.push(ParameterSpec::new());
        self.parameters.last_mut().unwrap()
    }

    /// Remove the parameter at `index`. Later parameters shift down one
    /// position.
    pub fn remove_parameter(&mut self, index: usize) -> Option<ParameterSpec> {
        (index < self.parameters.len()).then(|| self.parameters.remove(index))
    }

    /// Parse a persisted document.
    ///
    /// Optional leaves fall back to their editing defaults; structural
    /// problems (non-JSON input, wrong container types, unknown tags) are
    /// reported as [`DocumentError`].
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let wire: DocumentWire = serde_json::from_str(text)?;
        wire.into_document()
    }

    /// Persisted form: pretty-printed JSON in wire field order.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&DocumentWire::from_document(
            self,
        ))?)
    }

    /// Canonical form used for equality comparison: compact JSON with object
    /// keys sorted. Array order is preserved, so reordering parameters or
    /// groups produces a different canonical form.
    pub fn to_canonical_json(&self) -> Result<String, DocumentError> {
        let value = serde_json::to_value(DocumentWire::from_document(self))?;
        Ok(value.to_string())
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentWire::from_document(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DocumentWire::deserialize(deserializer)?
            .into_document()
            .map_err(D::Error::custom)
    }
}

/// On-disk form of a document. Field names and their order are the wire
/// contract.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DocumentWire {
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "func", default)]
    pub method: HttpMethod,
    #[serde(rename = "APICORE_version", default = "default_version")]
    pub schema_version: String,
    #[serde(default)]
    pub parameters: Vec<ParameterWire>,
    #[serde(default)]
    pub response: ResponseWire,
}

fn default_version() -> String {
    SUPPORTED_VERSION.to_string()
}

impl DocumentWire {
    pub(crate) fn from_document(doc: &ConfigDocument) -> Self {
        Self {
            friendly_name: doc.friendly_name.clone(),
            intro: doc.intro.clone(),
            icon: doc.icon.clone(),
            link: doc.link.clone(),
            method: doc.method,
            schema_version: doc.schema_version.clone(),
            parameters: doc.parameters.iter().map(ParameterWire::from_spec).collect(),
            response: ResponseWire::from_spec(&doc.response),
        }
    }

    pub(crate) fn into_document(self) -> Result<ConfigDocument, DocumentError> {
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for (index, wire) in self.parameters.into_iter().enumerate() {
            parameters.push(wire.into_spec(index)?);
        }
        Ok(ConfigDocument {
            schema_version: self.schema_version,
            friendly_name: self.friendly_name,
            intro: self.intro,
            icon: self.icon,
            link: self.link,
            method: self.method,
            parameters,
            response: self.response.into_spec()?,
        })
    }
}
