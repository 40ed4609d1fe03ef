use std::fmt::{Display, Formatter, Result};

use photo_storage::PhotoStorageError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Accepting the batch would take the upload set over its limit.
    CapacityExceeded {
        max_count: usize,
        accepted: usize,
        requested: usize,
    },
    /// A batch is still uploading.
    Busy,
    StorageError(String),
    InvalidInput(String),
    SettingsError(String),
    IoError(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::CapacityExceeded {
                max_count,
                accepted,
                requested,
            } => write!(
                f,
                "Maximum {} photos: {} already added, {} more requested",
                max_count, accepted, requested
            ),
            Error::Busy => write!(f, "Photos are still uploading"),
            Error::StorageError(message) => write!(f, "Storage error: {}", message),
            Error::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            Error::SettingsError(message) => write!(f, "Settings error: {}", message),
            Error::IoError(message) => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<PhotoStorageError> for Error {
    fn from(err: PhotoStorageError) -> Self {
        Error::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SettingsError(err.to_string())
    }
}
