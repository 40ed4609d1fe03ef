use crate::error::Error;

/// What the pipeline does once a step returns.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    /// Run the next step
    Continue,
    /// Stop here without an error; the remaining steps have nothing to do
    Skip,
    /// Stop here and fail the whole run
    Abort(Error),
}

/// One stage of a multi-step operation working on a shared context `T`.
///
/// A step reads what earlier steps left in the context, records its own
/// results there and tells the pipeline how to proceed. Steps that need no
/// work for the current context opt out via `should_execute`.
///
/// ```ignore
/// struct RejectEmptyBatchStep;
///
/// #[async_trait::async_trait]
/// impl PipelineStep<BatchContext> for RejectEmptyBatchStep {
///     fn name(&self) -> &'static str {
///         "reject_empty_batch"
///     }
///
///     async fn execute(&self, context: &mut BatchContext) -> StepAction {
///         if context.candidates.is_empty() {
///             return StepAction::Abort(Error::InvalidInput("no files".into()));
///         }
///         StepAction::Continue
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait PipelineStep<T>: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Checked right before `execute`; returning `false` skips only this step.
    fn should_execute(&self, _context: &T) -> bool {
        true
    }

    async fn execute(&self, context: &mut T) -> StepAction;
}
