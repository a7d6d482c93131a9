use std::fs;
use std::path::Path;

use crate::export::domain::transcript_writer::{TranscriptWriteError, TranscriptWriter};
use crate::transcription::domain::transcript::Transcript;

/// Writes the transcript text to a file as-is, UTF-8, no trailing newline
/// added.
pub struct TextFileWriter;

impl TextFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptWriter for TextFileWriter {
    fn write_transcript(
        &self,
        path: &Path,
        transcript: &Transcript,
    ) -> Result<(), TranscriptWriteError> {
        fs::write(path, transcript.text()).map_err(|source| TranscriptWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
