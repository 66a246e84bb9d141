//! Validate and preview command implementations

use std::io::Read;
use std::path::PathBuf;

use super::CliError;
use crate::models::ConfigDocument;
use crate::validation;

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::StdinReadError(e.to_string()))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

fn parse_input(input: &str) -> Result<ConfigDocument, CliError> {
    Ok(ConfigDocument::from_json_str(&load_input(input)?)?)
}

/// Handle the validate command
pub fn handle_validate(input: &str) -> Result<(), CliError> {
    let doc = parse_input(input)?;
    validation::validate(&doc)?;
    println!("Validation successful");
    Ok(())
}

/// Handle the preview command: re-emit the document in its persisted form.
pub fn handle_preview(input: &str) -> Result<(), CliError> {
    let doc = parse_input(input)?;
    println!("{}", doc.to_json_string()?);
    Ok(())
}
