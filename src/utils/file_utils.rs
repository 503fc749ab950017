/// File handling utilities
///
/// This module provides the read and write helpers used by the analyzer and
/// converter, mapping I/O failures onto the crate error taxonomy so a missing
/// input is distinguished from every other read or write problem.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::utils::error::{ConvertError, Result};

/// Read an entire capture file as UTF-8 text.
///
/// # Arguments
///
/// * `path` - Path to the capture file
///
/// # Returns
///
/// The file content; `InputNotFound` when the path does not exist, `Io` for
/// any other read or decode failure
pub fn read_text_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ConvertError::Io(e)),
    }
}

/// Write decoded bytes to the output path, creating or truncating the file.
///
/// # Arguments
///
/// * `path` - Destination for the raw binary image
/// * `data` - Decoded bytes to persist
pub fn write_binary_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
