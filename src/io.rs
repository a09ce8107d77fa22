//! Reading work requests and writing work responses.

use crate::error::{CutListError, Result};
use crate::model::{WorkRequest, WorkResponse};
use std::fs;
use std::path::Path;

/// Read a text file, rejecting missing and blank files.
pub fn read_non_empty(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CutListError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CutListError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

/// Parse a work request from a JSON file.
pub fn read_work_request(path: &Path) -> Result<WorkRequest> {
    let content = read_non_empty(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a work response as pretty-printed JSON.
pub fn write_work_response(path: &Path, response: &WorkResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response)?;
    fs::write(path, json)?;
    Ok(())
}
