use crate::utils::error::{CrafterError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Opens name lists and the output file on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl LocalFiles {
    pub fn new() -> Self {
        Self
    }

    pub fn open_names(&self, role: &str, path: &str) -> Result<BufReader<File>> {
        let file = File::open(path).map_err(|source| CrafterError::FileAccess {
            role: role.to_string(),
            path: path.to_string(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    /// Creates (or truncates) the output file, creating parent directories as needed.
    pub fn create_output(&self, path: &str) -> Result<BufWriter<File>> {
        let to_error = |source| CrafterError::FileAccess {
            role: "output".to_string(),
            path: path.to_string(),
            source,
        };

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_error)?;
            }
        }

        let file = File::create(path).map_err(to_error)?;
        Ok(BufWriter::new(file))
    }
}
