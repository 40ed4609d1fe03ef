use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_std::{channel::Sender, task};
use core_types::{RawFile, UploadedFile, events::UploadEvent};
use photo_storage::PhotoStorageOps;
use tracing::Instrument;

use crate::{
    error::Error,
    photo_upload::{
        context::{BatchContext, FailedTransfer},
        listener::AcceptedFilesListener,
        state::{UploadBatchState, lock_state},
    },
    pipeline::Pipeline,
    view_models::{DEFAULT_MAX_PHOTO_COUNT, Settings, UploadSnapshot},
};

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub max_count: usize,
    /// Photos the set starts with, e.g. when editing an existing listing.
    pub existing_files: Vec<UploadedFile>,
    pub progress_tx: Option<Sender<UploadEvent>>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_PHOTO_COUNT,
            existing_files: Vec::new(),
            progress_tx: None,
        }
    }
}

impl UploadOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_count: settings.max_photo_count,
            ..Default::default()
        }
    }

    /// Options for the uploader embedded in the property form.
    pub fn for_listing(settings: &Settings) -> Self {
        Self {
            max_count: settings.listing_max_photo_count,
            ..Default::default()
        }
    }
}

/// Result of a batch that was not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Newly accepted files, in input order.
    pub stored: Vec<UploadedFile>,
    pub failed: Vec<FailedTransfer>,
    /// Candidates ignored because they are not images.
    pub discarded: usize,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Owns one set of accepted photos and the uploads that grow it.
///
/// While a batch is uploading, every other mutating call (`submit_batch`,
/// `remove_file`, `clear_all`) returns [`Error::Busy`] and changes nothing.
/// Drag state can be toggled at any time.
pub struct PhotoUploadController {
    storage: Arc<dyn PhotoStorageOps>,
    listener: Arc<dyn AcceptedFilesListener>,
    state: Arc<Mutex<UploadBatchState>>,
    progress_tx: Option<Sender<UploadEvent>>,
    pipeline: Arc<Pipeline<BatchContext>>,
}

impl PhotoUploadController {
    pub fn new(
        storage: Arc<dyn PhotoStorageOps>,
        listener: Arc<dyn AcceptedFilesListener>,
        options: UploadOptions,
    ) -> Result<Self, Error> {
        if options.max_count == 0 {
            return Err(Error::InvalidInput(
                "maximum photo count must be at least 1".to_string(),
            ));
        }
        if options.existing_files.len() > options.max_count {
            return Err(Error::InvalidInput(format!(
                "{} existing photos exceed the maximum of {}",
                options.existing_files.len(),
                options.max_count
            )));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = options
            .existing_files
            .iter()
            .find(|f| !seen.insert(f.id.as_str()))
        {
            return Err(Error::InvalidInput(format!(
                "duplicate photo id {} in existing files",
                duplicate.id
            )));
        }

        Ok(Self {
            storage,
            listener,
            state: Arc::new(Mutex::new(UploadBatchState::new(
                options.max_count,
                options.existing_files,
            ))),
            progress_tx: options.progress_tx,
            pipeline: Arc::new(Pipeline::<BatchContext>::new()),
        })
    }

    /// Validates, transfers and commits one batch of candidates.
    ///
    /// Non-image candidates are ignored. If the images would not fit, nothing
    /// is stored and [`Error::CapacityExceeded`] is returned. Otherwise the
    /// images are stored one after another, files that fail to store are
    /// dropped, and the owner is notified once with the new accepted set.
    ///
    /// The batch runs on its own task: dropping the returned future does not
    /// stop it, and the set is still committed once the transfers finish.
    #[tracing::instrument(skip_all, fields(candidates = candidates.len()), err)]
    pub async fn submit_batch(&self, candidates: Vec<RawFile>) -> Result<BatchOutcome, Error> {
        let context = BatchContext::new(
            self.storage.clone(),
            self.state.clone(),
            self.progress_tx.clone(),
            candidates,
        );

        task::spawn(
            run_batch(self.pipeline.clone(), self.listener.clone(), context).in_current_span(),
        )
        .await
    }

    /// Files chosen in a file picker. An empty selection does nothing.
    pub async fn select_files(
        &self,
        candidates: Vec<RawFile>,
    ) -> Result<Option<BatchOutcome>, Error> {
        if candidates.is_empty() {
            return Ok(None);
        }
        self.submit_batch(candidates).await.map(Some)
    }

    /// Files dropped on the drop zone. Ends the drag, then behaves like `select_files`.
    pub async fn drop_files(&self, candidates: Vec<RawFile>) -> Result<Option<BatchOutcome>, Error> {
        lock_state(&self.state).drag_active = false;
        self.select_files(candidates).await
    }

    /// Removes the photo with `id`. An unknown id is not an error; the owner
    /// is notified either way.
    pub fn remove_file(&self, id: &str) -> Result<(), Error> {
        let accepted = {
            let mut state = lock_state(&self.state);
            if state.is_uploading {
                return Err(Error::Busy);
            }
            state.accepted.retain(|f| f.id != id);
            state.accepted.clone()
        };
        tracing::debug!(id, remaining = accepted.len(), "Photo removed");
        self.listener.on_accepted_changed(&accepted);
        Ok(())
    }

    pub fn clear_all(&self) -> Result<(), Error> {
        {
            let mut state = lock_state(&self.state);
            if state.is_uploading {
                return Err(Error::Busy);
            }
            state.accepted.clear();
        }
        tracing::debug!("All photos removed");
        self.listener.on_accepted_changed(&[]);
        Ok(())
    }

    pub fn drag_enter(&self) {
        lock_state(&self.state).drag_active = true;
    }

    pub fn drag_over(&self) {
        lock_state(&self.state).drag_active = true;
    }

    pub fn drag_leave(&self) {
        lock_state(&self.state).drag_active = false;
    }

    pub fn accepted(&self) -> Vec<UploadedFile> {
        lock_state(&self.state).accepted.clone()
    }

    pub fn is_uploading(&self) -> bool {
        lock_state(&self.state).is_uploading
    }

    pub fn progress_percent(&self) -> f64 {
        lock_state(&self.state).progress_percent
    }

    pub fn is_drag_active(&self) -> bool {
        lock_state(&self.state).drag_active
    }

    pub fn max_count(&self) -> usize {
        lock_state(&self.state).max_count
    }

    pub fn snapshot(&self) -> UploadSnapshot {
        let state = lock_state(&self.state);
        UploadSnapshot {
            accepted: state.accepted.clone(),
            max_count: state.max_count,
            is_uploading: state.is_uploading,
            progress_percent: state.progress_percent,
            drag_active: state.drag_active,
        }
    }
}

async fn run_batch(
    pipeline: Arc<Pipeline<BatchContext>>,
    listener: Arc<dyn AcceptedFilesListener>,
    mut context: BatchContext,
) -> Result<BatchOutcome, Error> {
    pipeline.execute(&mut context).await?;

    let accepted = {
        let mut state = lock_state(&context.state);
        state.accepted.extend(context.stored.iter().cloned());
        state.is_uploading = false;
        state.progress_percent = 0.0;
        state.accepted.clone()
    };
    listener.on_accepted_changed(&accepted);

    if !context.images.is_empty() {
        context
            .send_event(UploadEvent::BatchCompleted {
                stored: context.stored.len(),
                failed: context.failed.len(),
            })
            .await;
    }

    tracing::info!(
        stored = context.stored.len(),
        failed = context.failed.len(),
        discarded = context.discarded_count(),
        accepted = accepted.len(),
        "Photo batch committed"
    );

    let discarded = context.discarded_count();
    Ok(BatchOutcome {
        stored: context.stored,
        failed: context.failed,
        discarded,
    })
}
