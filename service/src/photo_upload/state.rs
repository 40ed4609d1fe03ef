use std::sync::{Mutex, MutexGuard, PoisonError};

use core_types::UploadedFile;

/// Mutable state owned by one upload controller.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadBatchState {
    /// Accepted photos in display order.
    pub accepted: Vec<UploadedFile>,
    /// True only while a batch is being transferred.
    pub is_uploading: bool,
    /// Progress of the running batch in `[0, 100]`; 0 when idle.
    pub progress_percent: f64,
    pub max_count: usize,
    pub drag_active: bool,
}

impl UploadBatchState {
    pub fn new(max_count: usize, accepted: Vec<UploadedFile>) -> Self {
        Self {
            accepted,
            is_uploading: false,
            progress_percent: 0.0,
            max_count,
            drag_active: false,
        }
    }
}

/// Share of a batch that is done, as a percentage.
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Locks the state, recovering it if a previous holder panicked.
///
/// Every write to the state is a plain field assignment, so a poisoned lock
/// still holds consistent data.
pub(crate) fn lock_state(state: &Mutex<UploadBatchState>) -> MutexGuard<'_, UploadBatchState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
