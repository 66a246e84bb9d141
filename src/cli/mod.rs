//! Command-line collaborator for APICORE documents
//!
//! A thin wrapper over the library for scripted use: validate a document
//! file, or parse one and print its persisted form. The editing application
//! links the library directly and does not go through this module.

pub mod commands;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DocumentError;
use crate::validation::SchemaViolation;

/// CLI-specific error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to read stdin: {0}")]
    StdinReadError(String),

    #[error("Malformed document: {0}")]
    Malformed(#[from] DocumentError),

    #[error("Validation failed: {0}")]
    Validation(#[from] SchemaViolation),
}
