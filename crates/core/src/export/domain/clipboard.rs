use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Domain interface for copying transcript text to the system clipboard.
///
/// Unavailability (headless session, denied access) is a recoverable
/// condition the caller reports and moves past, never a fatal one.
pub trait Clipboard: Send {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}
