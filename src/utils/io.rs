//! Text and YAML file helpers.
//!
//! The YAML helpers are best-effort: formatting or parsing failures are
//! logged and reported as `None` instead of an error.

use crate::utils::error::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serializes data to block-style YAML, keeping mapping insertion order.
pub fn format_data_to_yaml(data: &Value) -> Option<String> {
    match serde_yaml::to_string(data) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!("Error while formatting data to YAML: '{}'", e);
            None
        }
    }
}

pub fn parse_data_from_yaml(text: &str) -> Option<Value> {
    match serde_yaml::from_str(text) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::error!("Error while parsing YAML data: '{}'", e);
            None
        }
    }
}

/// Reads a file as text, replacing invalid UTF-8 sequences.
pub fn read_file_as_text(file: &Path) -> Result<String> {
    tracing::debug!("Reading text from file: '{}'", file.display());
    let data = fs::read(file)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

pub fn read_file_as_data(file: &Path) -> Result<Option<Value>> {
    tracing::info!("Reading data from file: '{}'", file.display());
    let text = read_file_as_text(file)?;
    let data = parse_data_from_yaml(&text);
    tracing::debug!("...DONE!");
    Ok(data)
}

pub fn write_text_to_file(text: &str, file: &Path) -> Result<()> {
    tracing::info!("Writing text to file: '{}'", file.display());
    fs::write(file, text.as_bytes())?;
    tracing::info!("...DONE!");
    Ok(())
}

/// Writes data as YAML; a value that cannot be formatted writes an empty file.
pub fn write_data_to_file(data: &Value, file: &Path) -> Result<()> {
    let text = format_data_to_yaml(data).unwrap_or_default();
    write_text_to_file(&text, file)
}
