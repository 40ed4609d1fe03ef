//! Staged photo upload: accepts batches of candidate files, stores the images
//! one at a time and publishes the accepted set to its owner.

pub mod context;
pub mod controller;
pub mod listener;
pub mod pipeline;
pub mod state;
pub mod steps;

pub use controller::{BatchOutcome, PhotoUploadController, UploadOptions};
pub use listener::{AcceptedFilesListener, DraftPhotos};
pub use state::{UploadBatchState, progress_percent};
