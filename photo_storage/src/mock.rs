use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use core_types::{RawFile, UploadedFile};

use crate::{PhotoStorageError, ops::PhotoStorageOps};

/// Internal state for MockPhotoStorage.
///
/// Groups all mutable state into a single struct for simplified locking.
#[derive(Default)]
struct MockState {
    /// Names of stored files in the order the stores completed
    stored_names: Vec<String>,
    /// Names of files whose store was attempted, in call order
    attempted_names: Vec<String>,
    /// File names that should fail to store
    fail_store_names: HashSet<String>,
    /// Artificial per-name transfer delays
    delays: HashMap<String, Duration>,
    /// Ids to hand out for specific names instead of the generated ones
    forced_ids: HashMap<String, String>,
    /// Counter used for generated ids
    next_id: u64,
}

/// Mock implementation of PhotoStorageOps for testing
///
/// This mock allows you to:
/// - Fail stores for specific file names
/// - Delay specific files to check ordering
/// - Script the ids handed out
/// - Verify what was stored and in which order
#[derive(Clone, Default)]
pub struct MockPhotoStorage {
    state: Arc<Mutex<MockState>>,
}

impl MockPhotoStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make store fail for a specific file name
    pub fn fail_store_for(&self, name: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.fail_store_names.insert(name.into());
    }

    /// Delay the store of a specific file name
    pub fn delay_store_for(&self, name: impl Into<String>, delay: Duration) {
        let mut state = self.state.lock().unwrap();
        state.delays.insert(name.into(), delay);
    }

    /// Always hand out `id` when storing a file called `name`
    pub fn force_id_for(&self, name: impl Into<String>, id: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.forced_ids.insert(name.into(), id.into());
    }

    /// Names of successfully stored files, in completion order
    pub fn stored_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.stored_names.clone()
    }

    /// Names of every file passed to `store`, in call order
    pub fn attempted_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.attempted_names.clone()
    }

    pub fn stored_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.stored_names.len()
    }

    pub fn was_stored(&self, name: &str) -> bool {
        let state = self.state.lock().unwrap();
        state.stored_names.iter().any(|n| n == name)
    }

    /// Clear all state (useful between tests)
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        *state = MockState::default();
    }
}

#[async_trait]
impl PhotoStorageOps for MockPhotoStorage {
    async fn store(&self, file: &RawFile) -> Result<UploadedFile, PhotoStorageError> {
        let (should_fail, delay) = {
            let mut state = self.state.lock().unwrap();
            state.attempted_names.push(file.name.clone());
            (
                state.fail_store_names.contains(&file.name),
                state.delays.get(&file.name).copied(),
            )
        };

        if let Some(delay) = delay {
            async_std::task::sleep(delay).await;
        }

        if should_fail {
            return Err(PhotoStorageError::Transfer(format!(
                "Mock store failure for file: {}",
                file.name
            )));
        }

        let mut state = self.state.lock().unwrap();
        let id = match state.forced_ids.get(&file.name) {
            Some(id) => id.clone(),
            None => {
                state.next_id += 1;
                format!("mock-{}", state.next_id)
            }
        };
        state.stored_names.push(file.name.clone());

        Ok(UploadedFile {
            reference: format!("mock://{}", id),
            id,
            name: file.name.clone(),
            size_bytes: file.size_bytes,
        })
    }
}
