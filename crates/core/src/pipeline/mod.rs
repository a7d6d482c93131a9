pub mod infrastructure;
pub mod pipeline_runner;
pub mod session;
pub mod stage;
pub mod transcribe_use_case;
