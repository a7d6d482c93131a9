use thiserror::Error;

use super::transcript::Transcript;
use crate::upload::domain::upload_validator::AcceptedUpload;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    Failed(String),
}

/// Domain interface for turning an accepted upload into a transcript.
///
/// This is the seam where a real speech-recognition engine plugs in; the
/// pipeline sequencing does not depend on which implementation is behind it.
/// Engine failures must map onto [`TranscriptionError::Failed`] so the caller
/// sees them after the run instead of a silent empty result.
pub trait TranscriptionBackend: Send {
    fn transcribe(&self, upload: &AcceptedUpload) -> Result<Transcript, TranscriptionError>;
}
