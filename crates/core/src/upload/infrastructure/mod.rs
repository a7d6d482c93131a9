pub mod file_probe;
