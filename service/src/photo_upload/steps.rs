use core_types::events::UploadEvent;

use crate::{
    error::Error,
    photo_upload::{
        context::{BatchContext, FailedTransfer},
        state::{lock_state, progress_percent},
    },
    pipeline::{PipelineStep, StepAction},
};

/// Step 1: keep only image candidates. Everything else is dropped silently.
pub struct FilterImageCandidatesStep;

#[async_trait::async_trait]
impl PipelineStep<BatchContext> for FilterImageCandidatesStep {
    fn name(&self) -> &'static str {
        "filter_image_candidates"
    }

    async fn execute(&self, context: &mut BatchContext) -> StepAction {
        context.images = context
            .candidates
            .iter()
            .filter(|file| file.is_image())
            .cloned()
            .collect();

        if context.discarded_count() > 0 {
            tracing::debug!(
                discarded = context.discarded_count(),
                images = context.images.len(),
                "Ignoring candidates that are not images"
            );
        }
        StepAction::Continue
    }
}

/// Step 2: reject the whole batch when it does not fit, otherwise enter the
/// uploading state. Both happen under one lock so two batches cannot both pass.
pub struct CheckCapacityStep;

#[async_trait::async_trait]
impl PipelineStep<BatchContext> for CheckCapacityStep {
    fn name(&self) -> &'static str {
        "check_capacity"
    }

    async fn execute(&self, context: &mut BatchContext) -> StepAction {
        let rejection = {
            let mut state = lock_state(&context.state);
            if state.is_uploading {
                Some(Error::Busy)
            } else if state.accepted.len() + context.images.len() > state.max_count {
                Some(Error::CapacityExceeded {
                    max_count: state.max_count,
                    accepted: state.accepted.len(),
                    requested: context.images.len(),
                })
            } else {
                context.existing_ids = state.accepted.iter().map(|f| f.id.clone()).collect();
                if !context.images.is_empty() {
                    state.is_uploading = true;
                    state.progress_percent = 0.0;
                }
                None
            }
        };

        match rejection {
            Some(error) => {
                context
                    .send_event(UploadEvent::BatchRejected {
                        reason: error.to_string(),
                    })
                    .await;
                StepAction::Abort(error)
            }
            // nothing to transfer, the batch commits as is
            None if context.images.is_empty() => StepAction::Skip,
            None => StepAction::Continue,
        }
    }
}

/// Step 3: store the images strictly one after another, in input order.
///
/// A failed store drops that image only; the rest of the batch continues.
pub struct TransferImagesStep;

#[async_trait::async_trait]
impl PipelineStep<BatchContext> for TransferImagesStep {
    fn name(&self) -> &'static str {
        "transfer_images"
    }

    fn should_execute(&self, context: &BatchContext) -> bool {
        !context.images.is_empty()
    }

    async fn execute(&self, context: &mut BatchContext) -> StepAction {
        let total_files = context.images.len();
        context
            .send_event(UploadEvent::BatchStarted { total_files })
            .await;

        let images = std::mem::take(&mut context.images);
        for (index, file) in images.iter().enumerate() {
            let file_number = index + 1;
            context
                .send_event(UploadEvent::FileTransferStarted {
                    name: file.name.clone(),
                    file_number,
                    total_files,
                })
                .await;

            let result = match context.storage.store(file).await {
                Ok(uploaded) if context.is_id_taken(&uploaded.id) => {
                    Err(format!("storage returned duplicate id {}", uploaded.id))
                }
                Ok(uploaded) => Ok(uploaded),
                Err(e) => Err(e.to_string()),
            };

            let progress = progress_percent(file_number, total_files);
            lock_state(&context.state).progress_percent = progress;

            match result {
                Ok(uploaded) => {
                    context.stored.push(uploaded);
                    context
                        .send_event(UploadEvent::FileTransferCompleted {
                            name: file.name.clone(),
                            file_number,
                            total_files,
                            progress_percent: progress,
                        })
                        .await;
                }
                Err(error) => {
                    tracing::warn!(name = %file.name, %error, "Photo transfer failed, dropping it from the batch");
                    context.failed.push(FailedTransfer {
                        name: file.name.clone(),
                        error: error.clone(),
                    });
                    context
                        .send_event(UploadEvent::FileTransferFailed {
                            name: file.name.clone(),
                            error,
                            file_number,
                            total_files,
                            progress_percent: progress,
                        })
                        .await;
                }
            }
        }
        context.images = images;

        StepAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use core_types::RawFile;
    use photo_storage::mock::MockPhotoStorage;
    use utils::test_utils::{document_file, image_file, uploaded_file};

    use super::*;
    use crate::photo_upload::state::UploadBatchState;

    fn context_with(
        storage: &MockPhotoStorage,
        state: UploadBatchState,
        candidates: Vec<RawFile>,
    ) -> BatchContext {
        BatchContext::new(
            Arc::new(storage.clone()),
            Arc::new(Mutex::new(state)),
            None,
            candidates,
        )
    }

    #[async_std::test]
    async fn test_filter_keeps_images_in_order() {
        let storage = MockPhotoStorage::new();
        let mut context = context_with(
            &storage,
            UploadBatchState::new(10, Vec::new()),
            vec![
                image_file("a.jpg"),
                document_file("plan.pdf"),
                image_file("b.jpg"),
            ],
        );

        let action = FilterImageCandidatesStep.execute(&mut context).await;

        assert_eq!(action, StepAction::Continue);
        let names: Vec<_> = context.images.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert_eq!(context.discarded_count(), 1);
    }

    #[async_std::test]
    async fn test_capacity_check_enters_uploading() {
        let storage = MockPhotoStorage::new();
        let mut context = context_with(
            &storage,
            UploadBatchState::new(2, vec![uploaded_file("x", "x.jpg")]),
            Vec::new(),
        );
        context.images = vec![image_file("a.jpg")];

        let action = CheckCapacityStep.execute(&mut context).await;

        assert_eq!(action, StepAction::Continue);
        assert!(context.existing_ids.contains("x"));
        let state = context.state.lock().unwrap();
        assert!(state.is_uploading);
        assert_eq!(state.progress_percent, 0.0);
    }

    #[async_std::test]
    async fn test_capacity_check_rejects_oversized_batch() {
        let storage = MockPhotoStorage::new();
        let mut context = context_with(
            &storage,
            UploadBatchState::new(2, vec![uploaded_file("x", "x.jpg")]),
            Vec::new(),
        );
        context.images = vec![image_file("a.jpg"), image_file("b.jpg")];

        let action = CheckCapacityStep.execute(&mut context).await;

        assert_eq!(
            action,
            StepAction::Abort(Error::CapacityExceeded {
                max_count: 2,
                accepted: 1,
                requested: 2
            })
        );
        assert!(!context.state.lock().unwrap().is_uploading);
    }

    #[async_std::test]
    async fn test_capacity_check_rejects_while_uploading() {
        let storage = MockPhotoStorage::new();
        let mut busy = UploadBatchState::new(5, Vec::new());
        busy.is_uploading = true;
        let mut context = context_with(&storage, busy, Vec::new());
        context.images = vec![image_file("a.jpg")];

        let action = CheckCapacityStep.execute(&mut context).await;

        assert_eq!(action, StepAction::Abort(Error::Busy));
    }

    #[async_std::test]
    async fn test_capacity_check_skips_empty_batch() {
        let storage = MockPhotoStorage::new();
        let mut context = context_with(&storage, UploadBatchState::new(1, Vec::new()), Vec::new());

        let action = CheckCapacityStep.execute(&mut context).await;

        assert_eq!(action, StepAction::Skip);
        assert!(!context.state.lock().unwrap().is_uploading);
    }

    #[async_std::test]
    async fn test_transfer_drops_failed_and_duplicate_files() {
        let storage = MockPhotoStorage::new();
        storage.fail_store_for("broken.jpg");
        storage.force_id_for("dupe.jpg", "x");
        let mut context = context_with(&storage, UploadBatchState::new(10, Vec::new()), Vec::new());
        context.images = vec![
            image_file("a.jpg"),
            image_file("broken.jpg"),
            image_file("dupe.jpg"),
            image_file("b.jpg"),
        ];
        context.existing_ids.insert("x".to_string());

        let action = TransferImagesStep.execute(&mut context).await;

        assert_eq!(action, StepAction::Continue);
        let stored: Vec<_> = context.stored.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(stored, vec!["a.jpg", "b.jpg"]);
        let failed: Vec<_> = context.failed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed, vec!["broken.jpg", "dupe.jpg"]);
        assert!(context.failed[1].error.contains("duplicate id"));
        assert_eq!(context.images.len(), 4);
        assert_eq!(context.state.lock().unwrap().progress_percent, 100.0);
    }

    #[test]
    fn test_transfer_not_needed_without_images() {
        let storage = MockPhotoStorage::new();
        let context = context_with(&storage, UploadBatchState::new(10, Vec::new()), Vec::new());
        assert!(!TransferImagesStep.should_execute(&context));
    }
}
