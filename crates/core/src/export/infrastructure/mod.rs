pub mod system_clipboard;
pub mod text_file_writer;
