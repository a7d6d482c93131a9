use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use thiserror::Error;

use crate::transcription::domain::transcript::Transcript;
use crate::transcription::domain::transcription_backend::{
    TranscriptionBackend, TranscriptionError,
};
use crate::upload::domain::upload_validator::AcceptedUpload;

use super::pipeline_runner::{PipelineError, PipelineRunner, ProgressFn, RunConfig};
use super::session::TranscriptionSession;
use super::stage::PipelineStage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscribeError {
    #[error("a transcription run is already active for this session")]
    RunInProgress,
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Backend(#[from] TranscriptionError),
}

/// Orchestrates one transcription run: claims the session, walks the stages
/// through the runner, then asks the backend for the transcript.
///
/// Reusable across runs; the session guard is released on every exit path, so
/// a new run may start once the previous one finished, was cancelled, or
/// failed. Concurrent starts on the same session are rejected.
pub struct TranscribeUseCase {
    session: TranscriptionSession,
    runner: Box<dyn PipelineRunner>,
    backend: Box<dyn TranscriptionBackend>,
    stages: Vec<PipelineStage>,
    config: RunConfig,
}

impl TranscribeUseCase {
    pub fn new(
        session: TranscriptionSession,
        runner: Box<dyn PipelineRunner>,
        backend: Box<dyn TranscriptionBackend>,
        stages: Vec<PipelineStage>,
        on_progress: Option<ProgressFn>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            session,
            runner,
            backend,
            stages,
            config: RunConfig::new(
                on_progress,
                cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
            ),
        }
    }

    pub fn execute(&self, upload: &AcceptedUpload) -> Result<Transcript, TranscribeError> {
        let _run = self
            .session
            .try_begin()
            .ok_or(TranscribeError::RunInProgress)?;
        log::info!(
            "starting transcription run for '{}' ({} stages)",
            upload.name(),
            self.stages.len()
        );
        self.runner.run(&self.stages, &self.config)?;
        let transcript = self.backend.transcribe(upload)?;
        log::info!(
            "transcription run complete: {} words",
            transcript.word_count()
        );
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::infrastructure::timed_pipeline_runner::TimedPipelineRunner;
    use crate::pipeline::stage::StageProgress;
    use crate::transcription::infrastructure::demo_backend::{
        demo_stages, DemoBackend, DEMO_TRANSCRIPT,
    };
    use crate::upload::domain::upload_candidate::UploadCandidate;
    use crate::upload::domain::upload_validator::UploadValidator;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;
    use std::time::Duration;

    // --- Stubs ---

    struct StubBackend {
        text: String,
    }

    impl TranscriptionBackend for StubBackend {
        fn transcribe(&self, _upload: &AcceptedUpload) -> Result<Transcript, TranscriptionError> {
            Ok(Transcript::new(self.text.clone()))
        }
    }

    struct FailingBackend;

    impl TranscriptionBackend for FailingBackend {
        fn transcribe(&self, _upload: &AcceptedUpload) -> Result<Transcript, TranscriptionError> {
            Err(TranscriptionError::Failed("engine exploded".to_string()))
        }
    }

    fn accepted_upload(name: &str) -> AcceptedUpload {
        UploadValidator::default()
            .validate(UploadCandidate::new(name, "audio/wav", 2_000_000))
            .unwrap()
    }

    fn instant_stages(count: usize) -> Vec<PipelineStage> {
        (0..count)
            .map(|i| PipelineStage::new(format!("stage {}", i + 1), Duration::ZERO))
            .collect()
    }

    fn rounded(percent: f64) -> f64 {
        (percent * 10.0).round() / 10.0
    }

    #[test]
    fn test_execute_returns_backend_transcript() {
        let use_case = TranscribeUseCase::new(
            TranscriptionSession::new(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "hello there".to_string(),
            }),
            instant_stages(3),
            None,
            None,
        );

        let transcript = use_case.execute(&accepted_upload("voice.wav")).unwrap();

        assert_eq!(transcript.text(), "hello there");
        assert_eq!(transcript.word_count(), 2);
    }

    #[test]
    fn test_progress_events_cover_every_stage() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let use_case = TranscribeUseCase::new(
            TranscriptionSession::new(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "t".to_string(),
            }),
            instant_stages(4),
            Some(Box::new(move |progress: &StageProgress| {
                sink.lock().unwrap().push(progress.clone());
                true
            })),
            None,
        );

        use_case.execute(&accepted_upload("voice.wav")).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events.last().unwrap().percent_complete(), 100.0);
    }

    #[test]
    fn test_concurrent_execute_on_same_session_is_rejected() {
        let session = TranscriptionSession::new();
        let inner = TranscribeUseCase::new(
            session.clone(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "inner".to_string(),
            }),
            instant_stages(1),
            None,
            None,
        );
        let rejection = Arc::new(Mutex::new(None));

        let seen = rejection.clone();
        let upload = accepted_upload("voice.wav");
        let inner_upload = upload.clone();
        let outer = TranscribeUseCase::new(
            session,
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "outer".to_string(),
            }),
            instant_stages(2),
            Some(Box::new(move |_progress: &StageProgress| {
                *seen.lock().unwrap() = Some(inner.execute(&inner_upload));
                true
            })),
            None,
        );

        let transcript = outer.execute(&upload).unwrap();

        assert_eq!(transcript.text(), "outer");
        let inner_result = rejection.lock().unwrap().take().unwrap();
        assert_eq!(inner_result.unwrap_err(), TranscribeError::RunInProgress);
    }

    #[test]
    fn test_sequential_runs_reuse_the_session() {
        let use_case = TranscribeUseCase::new(
            TranscriptionSession::new(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "again".to_string(),
            }),
            instant_stages(2),
            None,
            None,
        );
        let upload = accepted_upload("voice.wav");

        assert!(use_case.execute(&upload).is_ok());
        assert!(use_case.execute(&upload).is_ok());
    }

    #[test]
    fn test_cancelled_run_releases_session_for_the_next_one() {
        let session = TranscriptionSession::new();
        let cancelled = Arc::new(AtomicBool::new(true));
        let use_case = TranscribeUseCase::new(
            session.clone(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(StubBackend {
                text: "t".to_string(),
            }),
            instant_stages(3),
            None,
            Some(cancelled.clone()),
        );
        let upload = accepted_upload("voice.wav");

        let result = use_case.execute(&upload);
        assert_eq!(
            result.unwrap_err(),
            TranscribeError::Pipeline(PipelineError::Cancelled)
        );
        assert!(!session.is_active());

        cancelled.store(false, Ordering::SeqCst);
        assert!(use_case.execute(&upload).is_ok());
    }

    #[test]
    fn test_backend_failure_propagates_and_releases_session() {
        let session = TranscriptionSession::new();
        let use_case = TranscribeUseCase::new(
            session.clone(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(FailingBackend),
            instant_stages(1),
            None,
            None,
        );

        let result = use_case.execute(&accepted_upload("voice.wav"));

        assert_eq!(
            result.unwrap_err(),
            TranscribeError::Backend(TranscriptionError::Failed("engine exploded".to_string()))
        );
        assert!(!session.is_active());
    }

    #[test]
    fn test_demo_run_end_to_end() {
        let upload = UploadValidator::default()
            .validate(UploadCandidate::new("voice.wav", "audio/wav", 2_000_000))
            .unwrap();
        // Demo labels with the waiting stripped out, so the test is instant.
        let stages: Vec<PipelineStage> = demo_stages()
            .into_iter()
            .map(|stage| PipelineStage::new(stage.label, Duration::ZERO))
            .collect();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let use_case = TranscribeUseCase::new(
            TranscriptionSession::new(),
            Box::new(TimedPipelineRunner::new()),
            Box::new(DemoBackend::new()),
            stages,
            Some(Box::new(move |progress: &StageProgress| {
                sink.lock().unwrap().push(progress.clone());
                true
            })),
            None,
        );

        let transcript = use_case.execute(&upload).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 7);
        assert_eq!(events[0].stage, "Analyzing audio format...");
        assert_eq!(events[6].stage, "Finalizing transcription...");
        let percents: Vec<f64> = events
            .iter()
            .map(|e| rounded(e.percent_complete()))
            .collect();
        assert_eq!(percents, vec![14.3, 28.6, 42.9, 57.1, 71.4, 85.7, 100.0]);
        assert_eq!(transcript.text(), DEMO_TRANSCRIPT);
    }

    #[test]
    fn test_error_messages_are_one_line() {
        assert_eq!(
            TranscribeError::RunInProgress.to_string(),
            "a transcription run is already active for this session"
        );
        assert_eq!(
            TranscribeError::Pipeline(PipelineError::Cancelled).to_string(),
            "transcription run cancelled"
        );
    }
}
