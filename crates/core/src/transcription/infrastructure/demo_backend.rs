use std::time::Duration;

use crate::pipeline::stage::PipelineStage;
use crate::transcription::domain::transcript::Transcript;
use crate::transcription::domain::transcription_backend::{
    TranscriptionBackend, TranscriptionError,
};
use crate::upload::domain::upload_validator::AcceptedUpload;

/// The fixed text the demo backend produces, independent of the input file.
/// Note the trailing space at the end of the first paragraph; the text is
/// carried verbatim.
pub const DEMO_TRANSCRIPT: &str = "Welcome to our audio transcription service. This is a demonstration of how your audio file would be converted to text. \n\nThe audio processing system analyzes your uploaded file, splits it into manageable segments if needed, and uses advanced speech recognition technology to convert speech to text.\n\nKey features include:\n- Support for multiple audio formats\n- Automatic audio segmentation for long files\n- High accuracy speech recognition\n- Real-time processing status updates\n- Easy text export and copying\n\nYour actual transcription results would appear here based on the content of your uploaded audio file.";

/// The fixed stage sequence the demo pipeline walks through.
pub fn demo_stages() -> Vec<PipelineStage> {
    vec![
        PipelineStage::new("Analyzing audio format...", Duration::from_millis(1000)),
        PipelineStage::new("Splitting audio into segments...", Duration::from_millis(2000)),
        PipelineStage::new("Processing segment 1/3...", Duration::from_millis(1500)),
        PipelineStage::new("Processing segment 2/3...", Duration::from_millis(1500)),
        PipelineStage::new("Processing segment 3/3...", Duration::from_millis(1500)),
        PipelineStage::new("Combining results...", Duration::from_millis(1000)),
        PipelineStage::new("Finalizing transcription...", Duration::from_millis(500)),
    ]
}

/// Stand-in backend that ignores the audio content and returns the fixed demo
/// transcript, so the full pipeline path can be exercised without a speech
/// engine.
pub struct DemoBackend;

impl DemoBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptionBackend for DemoBackend {
    fn transcribe(&self, upload: &AcceptedUpload) -> Result<Transcript, TranscriptionError> {
        log::debug!("demo backend transcribing '{}'", upload.name());
        Ok(Transcript::new(DEMO_TRANSCRIPT))
    }
}
