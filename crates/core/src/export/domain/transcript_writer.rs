use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{DEFAULT_TRANSCRIPT_STEM, TRANSCRIPT_EXTENSION};
use crate::transcription::domain::transcript::Transcript;

#[derive(Debug, Error)]
#[error("failed to write transcript to {path}: {source}")]
pub struct TranscriptWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Domain interface for saving a transcript as a file.
pub trait TranscriptWriter: Send {
    fn write_transcript(
        &self,
        path: &Path,
        transcript: &Transcript,
    ) -> Result<(), TranscriptWriteError>;
}

/// Derives the download name for a transcript: the source file's base name
/// with its final extension replaced by `.txt`. An empty source name falls
/// back to `transcription.txt`.
pub fn transcript_file_name(source_name: &str) -> String {
    let stem = match source_name.rfind('.') {
        Some(index) if index > 0 => &source_name[..index],
        _ => source_name,
    };
    if stem.is_empty() {
        return format!("{DEFAULT_TRANSCRIPT_STEM}.{TRANSCRIPT_EXTENSION}");
    }
    format!("{stem}.{TRANSCRIPT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("voice.wav", "voice.txt")]
    #[case::no_extension("notes", "notes.txt")]
    #[case::double_extension("archive.tar.gz", "archive.tar.txt")]
    #[case::dot_file(".hidden", ".hidden.txt")]
    #[case::empty("", "transcription.txt")]
    #[case::trailing_dot("weird.", "weird.txt")]
    fn test_transcript_file_name(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(transcript_file_name(source), expected);
    }
}
