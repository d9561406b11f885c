// Thu Feb 12 2026 - Alex

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to read log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct LogFile;

impl LogFile {
    // Whole-file read into an ordered line sequence; order is the append
    // order of the source file.
    pub fn read(path: &Path) -> Result<Vec<String>, ReadError> {
        let text = fs::read_to_string(path).map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(text.lines().map(str::to_string).collect())
    }
}
