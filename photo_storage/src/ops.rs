use async_trait::async_trait;
use core_types::{RawFile, UploadedFile};

use crate::PhotoStorageError;

/// Capability for storing a single photo somewhere it can be displayed from.
///
/// The upload controller only sees this trait, so tests can inject a
/// deterministic fake and a real backend can replace the simulator.
#[async_trait]
pub trait PhotoStorageOps: Send + Sync {
    /// Store one photo and return its accepted representation.
    ///
    /// The returned `UploadedFile` carries a fresh id and a reference that can
    /// be used to render the photo. A failure only affects this one file.
    async fn store(&self, file: &RawFile) -> Result<UploadedFile, PhotoStorageError>;
}
