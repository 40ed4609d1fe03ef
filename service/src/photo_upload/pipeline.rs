use crate::{
    photo_upload::{
        context::BatchContext,
        steps::{CheckCapacityStep, FilterImageCandidatesStep, TransferImagesStep},
    },
    pipeline::Pipeline,
};

impl Default for Pipeline<BatchContext> {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline<BatchContext> {
    /// All validation runs before the first transfer, so a rejected batch
    /// leaves the accepted set untouched.
    pub fn new() -> Self {
        Self::with_steps(vec![
            Box::new(FilterImageCandidatesStep),
            Box::new(CheckCapacityStep),
            Box::new(TransferImagesStep),
        ])
    }
}
