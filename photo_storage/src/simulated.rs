use std::time::Duration;

use async_trait::async_trait;
use core_types::{RawFile, UploadedFile};
use uuid::Uuid;

use crate::{PhotoStorageError, ops::PhotoStorageOps};

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Prefix of references produced by the simulator.
pub const LOCAL_BLOB_PREFIX: &str = "blob:local/";

/// Stand-in for an upload backend.
///
/// Every store waits a fixed delay and then succeeds with a local blob
/// reference; no bytes leave the process.
#[derive(Debug, Clone)]
pub struct SimulatedPhotoStorage {
    delay: Duration,
}

impl Default for SimulatedPhotoStorage {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }
}

impl SimulatedPhotoStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl PhotoStorageOps for SimulatedPhotoStorage {
    async fn store(&self, file: &RawFile) -> Result<UploadedFile, PhotoStorageError> {
        tracing::debug!(name = %file.name, delay_ms = self.delay.as_millis() as u64, "Simulating photo transfer");
        if !self.delay.is_zero() {
            async_std::task::sleep(self.delay).await;
        }

        let id = Uuid::new_v4().simple().to_string();
        Ok(UploadedFile {
            reference: format!("{}{}", LOCAL_BLOB_PREFIX, id),
            id,
            name: file.name.clone(),
            size_bytes: file.size_bytes,
        })
    }
}
