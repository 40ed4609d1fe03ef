// Storage backends for listing photos.
//
// Nothing here talks to a real server: `SimulatedPhotoStorage` stands in for an
// upload backend by waiting a fixed delay and handing back a local blob
// reference. A real backend only needs to implement `PhotoStorageOps`.

pub mod mock;
pub mod ops;
pub mod simulated;

pub use ops::PhotoStorageOps;
pub use simulated::SimulatedPhotoStorage;

#[derive(Debug, thiserror::Error)]
pub enum PhotoStorageError {
    #[error("Transfer error: {0}")]
    Transfer(String),
}
