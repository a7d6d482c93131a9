//! Upload validation, the simulated transcription pipeline, and transcript
//! export actions. Rendering and interaction stay with the callers.

pub mod export;
pub mod pipeline;
pub mod shared;
pub mod transcription;
pub mod upload;
