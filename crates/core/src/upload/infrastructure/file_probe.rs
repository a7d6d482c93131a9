use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::upload::domain::upload_candidate::UploadCandidate;

/// Extension to media-type table matching what browsers report for these
/// formats (mp3 arrives as `audio/mpeg`).
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("wav", "audio/wav"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("webm", "audio/webm"),
    ("m4a", "audio/m4a"),
];

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read metadata for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a regular file")]
    NotAFile { path: PathBuf },
}

/// Builds an upload candidate from a filesystem path the way a browser file
/// input would: name from the final path component, size from metadata,
/// media type guessed from the extension.
pub struct FileProbe;

impl FileProbe {
    pub fn probe(path: &Path) -> Result<UploadCandidate, ProbeError> {
        let metadata = fs::metadata(path).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ProbeError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = guess_media_type(&name);
        Ok(UploadCandidate::new(name, media_type, metadata.len()))
    }
}

fn guess_media_type(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension {
        Some(ext) => MEDIA_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, media_type)| *media_type)
            .unwrap_or(UNKNOWN_MEDIA_TYPE),
        None => UNKNOWN_MEDIA_TYPE,
    }
}
