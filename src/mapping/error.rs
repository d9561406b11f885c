// Tue Feb 10 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Mapping source not found: {0}")]
    MissingSource(PathBuf),
    #[error("Failed to read mapping source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
