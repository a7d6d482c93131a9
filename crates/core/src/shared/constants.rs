/// Media types browsers report for the audio formats the pipeline accepts.
/// Both `audio/mp3` and `audio/mpeg` appear because browsers disagree on mp3.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "audio/wav",
    "audio/mp3",
    "audio/mpeg",
    "audio/ogg",
    "audio/webm",
    "audio/m4a",
];

pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "webm", "m4a"];

/// Upload size ceiling (100 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

pub const TRANSCRIPT_EXTENSION: &str = "txt";

/// Stem used for the derived transcript file when the source name is empty.
pub const DEFAULT_TRANSCRIPT_STEM: &str = "transcription";
