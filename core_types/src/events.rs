#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    BatchStarted {
        total_files: usize,
    },
    FileTransferStarted {
        name: String,
        file_number: usize,
        total_files: usize,
    },
    FileTransferCompleted {
        name: String,
        file_number: usize,
        total_files: usize,
        progress_percent: f64,
    },
    FileTransferFailed {
        name: String,
        error: String,
        file_number: usize,
        total_files: usize,
        progress_percent: f64,
    },
    BatchCompleted {
        stored: usize,
        failed: usize,
    },
    BatchRejected {
        reason: String,
    },
}

impl UploadEvent {
    /// Progress reported by per-file events, `None` for batch level events.
    pub fn progress_percent(&self) -> Option<f64> {
        match self {
            UploadEvent::FileTransferCompleted {
                progress_percent, ..
            }
            | UploadEvent::FileTransferFailed {
                progress_percent, ..
            } => Some(*progress_percent),
            _ => None,
        }
    }
}
