pub mod clipboard;
pub mod transcript_writer;
