use super::pipeline_step::{PipelineStep, StepAction};
use crate::error::Error;

/// Runs a fixed list of steps over one context, in order.
///
/// Each operation that is made of several stages (validation before any side
/// effect, then the work itself) builds its own `Pipeline<Context>` and keeps
/// the per-run state in the context rather than in the steps.
pub struct Pipeline<T> {
    pub steps: Vec<Box<dyn PipelineStep<T>>>,
}

impl<T> Pipeline<T> {
    pub fn with_steps(steps: Vec<Box<dyn PipelineStep<T>>>) -> Self {
        Self { steps }
    }

    /// Executes the steps until they are all done, one skips the rest, or one aborts.
    ///
    /// Returns `Ok(())` on completion or skip and the abort error otherwise.
    pub async fn execute(&self, context: &mut T) -> Result<(), Error> {
        for step in &self.steps {
            if !step.should_execute(context) {
                tracing::debug!(step = step.name(), "Step not needed, skipping");
                continue;
            }

            tracing::debug!(step = step.name(), "Executing step");

            match step.execute(context).await {
                StepAction::Continue => continue,
                StepAction::Skip => {
                    tracing::debug!(step = step.name(), "Step ended the pipeline early");
                    return Ok(());
                }
                StepAction::Abort(error) => {
                    tracing::info!(step = step.name(), %error, "Step aborted the pipeline");
                    return Err(error);
                }
            }
        }

        Ok(())
    }
}
