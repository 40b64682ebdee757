//! Input file loading.

use std::io::ErrorKind;
use std::path::Path;

use crate::errors::SourceError;

/// Read the source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound {
            path: path.display().to_string(),
        },
        _ => SourceError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}
