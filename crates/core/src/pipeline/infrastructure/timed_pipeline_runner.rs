use std::sync::atomic::Ordering;
use std::thread;

use crate::pipeline::pipeline_runner::{PipelineError, PipelineRunner, RunConfig};
use crate::pipeline::stage::{PipelineStage, StageProgress};

/// Runner that suspends the calling thread for each stage's fixed duration.
///
/// The whole run happens on the caller's thread; there is no parallelism to
/// coordinate, only the sleep per stage and the boundary checks.
pub struct TimedPipelineRunner;

impl TimedPipelineRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimedPipelineRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineRunner for TimedPipelineRunner {
    fn run(&self, stages: &[PipelineStage], config: &RunConfig) -> Result<(), PipelineError> {
        let total = stages.len();
        for (index, stage) in stages.iter().enumerate() {
            if config.cancelled.load(Ordering::Relaxed) {
                log::info!("run cancelled before stage '{}'", stage.label);
                return Err(PipelineError::Cancelled);
            }
            thread::sleep(stage.duration);
            let progress = StageProgress {
                stage: stage.label.clone(),
                completed: index + 1,
                total,
            };
            log::debug!(
                "completed stage {}/{}: {} ({:.1}%)",
                progress.completed,
                progress.total,
                progress.stage,
                progress.percent_complete()
            );
            if let Some(on_progress) = &config.on_progress {
                if !on_progress(&progress) {
                    log::info!("run cancelled after stage '{}'", stage.label);
                    return Err(PipelineError::Cancelled);
                }
            }
        }
        Ok(())
    }
}
