//! Enums for the APICORE document model
//!
//! # Serde Casing Conventions
//!
//! The enums in this module use the serde `rename_all` strategy the persisted
//! document format requires:
//!
//! - `UPPERCASE`: wire constants (`HttpMethod`, `ImageContentType`)
//! - `lowercase`: type tags (`ParameterKind`, `DataItemType`)
//!
//! These spellings are part of the on-disk contract and must not change.

use serde::{Deserialize, Serialize};

/// HTTP request method, stored in the document's `func` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// How the designated image is delivered in an API response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageContentType {
    /// The response carries a URL (or list of URLs) pointing at the image.
    #[default]
    Url,
    /// The response body itself is the image payload.
    Binary,
}

/// Discriminant of the five parameter kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Integer,
    Boolean,
    List,
    /// Kind of a freshly created parameter.
    #[default]
    String,
    Enum,
}

impl ParameterKind {
    /// Wire name of the kind, as it appears in a parameter's `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Integer => "integer",
            ParameterKind::Boolean => "boolean",
            ParameterKind::List => "list",
            ParameterKind::String => "string",
            ParameterKind::Enum => "enum",
        }
    }

    /// Parse a wire type tag. Returns `None` for tags outside the closed set.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "integer" => Some(ParameterKind::Integer),
            "boolean" => Some(ParameterKind::Boolean),
            "list" => Some(ParameterKind::List),
            "string" => Some(ParameterKind::String),
            "enum" => Some(ParameterKind::Enum),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a data item extracted from a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataItemType {
    #[default]
    String,
    List,
}

impl DataItemType {
    /// Wire name of the type, as it appears in a data item's `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataItemType::String => "string",
            DataItemType::List => "list",
        }
    }

    /// Parse a wire type tag. Returns `None` for tags outside the closed set.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(DataItemType::String),
            "list" => Some(DataItemType::List),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
