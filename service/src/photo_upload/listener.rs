use std::sync::{Arc, Mutex, PoisonError};

use core_types::UploadedFile;
use domain::property_draft::PropertyDraft;

/// Receives the full accepted set every time it changes.
pub trait AcceptedFilesListener: Send + Sync {
    fn on_accepted_changed(&self, files: &[UploadedFile]);
}

impl<F> AcceptedFilesListener for F
where
    F: Fn(&[UploadedFile]) + Send + Sync,
{
    fn on_accepted_changed(&self, files: &[UploadedFile]) {
        self(files)
    }
}

/// Keeps the photos of a property draft in sync with an upload controller.
#[derive(Clone, Default)]
pub struct DraftPhotos {
    photos: Arc<Mutex<Vec<UploadedFile>>>,
}

impl DraftPhotos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Vec<UploadedFile> {
        self.photos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Copies the latest accepted set into the draft's photo field.
    pub fn apply_to(&self, draft: &mut PropertyDraft) {
        draft.set_photos(self.current());
    }
}

impl AcceptedFilesListener for DraftPhotos {
    fn on_accepted_changed(&self, files: &[UploadedFile]) {
        let mut photos = self.photos.lock().unwrap_or_else(PoisonError::into_inner);
        *photos = files.to_vec();
    }
}
