use std::collections::HashSet;

use thiserror::Error;

use super::upload_candidate::UploadCandidate;
use crate::shared::constants::{ALLOWED_MEDIA_TYPES, AUDIO_EXTENSIONS, MAX_UPLOAD_BYTES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported format")]
    UnsupportedFormat,
    #[error("file too large")]
    FileTooLarge,
}

/// A candidate that passed validation. Only the validator constructs these,
/// so holding one is proof the format and size checks succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptedUpload {
    candidate: UploadCandidate,
}

impl AcceptedUpload {
    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn media_type(&self) -> &str {
        &self.candidate.declared_media_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.candidate.size_bytes
    }
}

/// Checks an upload candidate against a media-type allow-list and a size
/// ceiling.
///
/// A candidate passes the format check when its declared media type is in the
/// allow-list OR its name carries a known audio extension. The OR is
/// intentional: a mislabeled media type is still accepted on extension match
/// alone. The format check runs before the size check, so a candidate failing
/// both reports the format error.
pub struct UploadValidator {
    allowed_media_types: HashSet<String>,
    max_size_bytes: u64,
}

impl UploadValidator {
    pub fn new(allowed_media_types: &[&str], max_size_bytes: u64) -> Self {
        Self {
            allowed_media_types: allowed_media_types.iter().map(|t| t.to_string()).collect(),
            max_size_bytes,
        }
    }

    pub fn validate(&self, candidate: UploadCandidate) -> Result<AcceptedUpload, UploadError> {
        if !self.has_allowed_media_type(&candidate) && !has_audio_extension(&candidate.name) {
            return Err(UploadError::UnsupportedFormat);
        }
        if candidate.size_bytes > self.max_size_bytes {
            return Err(UploadError::FileTooLarge);
        }
        Ok(AcceptedUpload { candidate })
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    fn has_allowed_media_type(&self, candidate: &UploadCandidate) -> bool {
        self.allowed_media_types
            .contains(candidate.declared_media_type.as_str())
    }
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(ALLOWED_MEDIA_TYPES, MAX_UPLOAD_BYTES)
    }
}

fn has_audio_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    AUDIO_EXTENSIONS
        .iter()
        .any(|ext| matches!(lower.strip_suffix(ext), Some(stem) if stem.ends_with('.')))
}
