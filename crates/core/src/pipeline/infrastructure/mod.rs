pub mod timed_pipeline_runner;
