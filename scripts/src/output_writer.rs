//! JSON record of the deployed contracts

use std::{fmt::LowerHex, fs, fs::File, io::Read, path::Path};

use json::JsonValue;

use crate::errors::ScriptError;

/// Location of a value inside the deployment record
pub enum OutputKeys<'a> {
    /// Key related to a deployment
    Deployment {
        /// Name of the deployed contract
        key: &'a str,
    },
    /// Key related to a transaction sent to a deployed contract
    Tx {
        /// Name of the contract the transaction targeted
        key: &'a str,
        /// Name of the transaction
        tx_key: &'a str,
    },
}

/// Read a value from the deployment record
pub fn read_output_file(file_path: &Path, key: OutputKeys<'_>) -> Result<String, ScriptError> {
    if !file_path.exists() {
        return Err(ScriptError::JsonOutputError(format!(
            "Deployment record {} not found",
            file_path.display()
        )));
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    let (final_key, description) = match key {
        OutputKeys::Deployment { key } => (&parsed_json[key]["deploy"], format!("{key}.deploy")),
        OutputKeys::Tx { key, tx_key } => {
            (&parsed_json[key]["txs"][tx_key], format!("{key}.txs.{tx_key}"))
        }
    };

    final_key
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScriptError::JsonOutputError(format!("{description} is missing")))
}

/// Writes the given value under `key`, keeping the rest of the record
pub fn write_output_file<T: LowerHex>(
    file_path: &Path,
    key: OutputKeys<'_>,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the right key
    match key {
        OutputKeys::Deployment { key } => {
            parsed_json[key]["deploy"] = JsonValue::String(format!("{value:#x}"))
        }
        OutputKeys::Tx { key, tx_key } => {
            parsed_json[key]["txs"][tx_key] = JsonValue::String(format!("{value:#x}"))
        }
    };

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}
