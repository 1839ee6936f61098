use std::path::PathBuf;

use epiviz_core::DataError;

/// Failures while reading configuration or simulation inputs from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid config in {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid data in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}
