//! File utilities for reading results files.
//!
//! Results files come from simulation and hardware runs that occasionally
//! leave stray non-UTF-8 bytes behind, so reading falls back to lossy
//! decoding instead of failing the whole report.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::errors::{ReporterError, Result};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully.
    ///
    /// The file is read in full and closed before this returns.
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        let bytes = fs::read(file_path).map_err(|e| {
            ReporterError::io(format!("Failed to read file: {}", file_path.display()), e)
        })?;
        debug!("Read {} bytes from {}", bytes.len(), file_path.display());

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
