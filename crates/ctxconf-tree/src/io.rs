//! File reading for tree and settings documents

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
