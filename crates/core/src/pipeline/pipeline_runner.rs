use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use thiserror::Error;

use super::stage::{PipelineStage, StageProgress};

/// Progress callback invoked after each stage completes. Return false to
/// abort the run before the next stage starts.
pub type ProgressFn = Box<dyn Fn(&StageProgress) -> bool + Send>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("transcription run cancelled")]
    Cancelled,
}

/// Per-run knobs shared by every runner implementation.
pub struct RunConfig {
    pub on_progress: Option<ProgressFn>,
    /// Checked at every stage boundary; set to abort the run.
    pub cancelled: Arc<AtomicBool>,
}

impl RunConfig {
    pub fn new(on_progress: Option<ProgressFn>, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            on_progress,
            cancelled,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Walks an ordered stage sequence, emitting one progress event per stage.
///
/// Stages run strictly sequentially; cancellation is honored at stage
/// boundaries only, since stages do no interruptible work.
pub trait PipelineRunner: Send {
    fn run(&self, stages: &[PipelineStage], config: &RunConfig) -> Result<(), PipelineError>;
}
