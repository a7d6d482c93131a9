use std::time::Duration;

/// One named unit of the pipeline with a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineStage {
    pub label: String,
    pub duration: Duration,
}

impl PipelineStage {
    pub fn new(label: impl Into<String>, duration: Duration) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }
}

/// Emitted once after each stage completes; there is no partial-stage
/// granularity.
#[derive(Clone, Debug, PartialEq)]
pub struct StageProgress {
    pub stage: String,
    pub completed: usize,
    pub total: usize,
}

impl StageProgress {
    /// Cumulative percentage over the run. Non-decreasing across the events
    /// of a run, exactly 100.0 once `completed == total`.
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}
