use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_std::channel::Sender;
use core_types::{RawFile, UploadedFile, events::UploadEvent};
use photo_storage::PhotoStorageOps;

use crate::photo_upload::state::UploadBatchState;

/// A candidate that passed validation but could not be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedTransfer {
    pub name: String,
    pub error: String,
}

/// Per-batch state passed through the upload steps.
pub struct BatchContext {
    pub storage: Arc<dyn PhotoStorageOps>,
    pub state: Arc<Mutex<UploadBatchState>>,
    pub progress_tx: Option<Sender<UploadEvent>>,

    /// Files as handed over by the picker or drop event.
    pub candidates: Vec<RawFile>,

    // Filled by FilterImageCandidatesStep
    pub images: Vec<RawFile>,

    // Filled by CheckCapacityStep, ids already taken when the batch started
    pub existing_ids: HashSet<String>,

    // Transfer results, in input order
    pub stored: Vec<UploadedFile>,
    pub failed: Vec<FailedTransfer>,
}

impl BatchContext {
    pub fn new(
        storage: Arc<dyn PhotoStorageOps>,
        state: Arc<Mutex<UploadBatchState>>,
        progress_tx: Option<Sender<UploadEvent>>,
        candidates: Vec<RawFile>,
    ) -> Self {
        Self {
            storage,
            state,
            progress_tx,
            candidates,
            images: Vec::new(),
            existing_ids: HashSet::new(),
            stored: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn discarded_count(&self) -> usize {
        self.candidates.len() - self.images.len()
    }

    pub fn is_id_taken(&self, id: &str) -> bool {
        self.existing_ids.contains(id) || self.stored.iter().any(|f| f.id == id)
    }

    pub async fn send_event(&self, event: UploadEvent) {
        if let Some(tx) = &self.progress_tx {
            if let Err(e) = tx.send(event).await {
                tracing::error!(error = ?e, "Failed to send upload progress event");
            }
        }
    }
}
