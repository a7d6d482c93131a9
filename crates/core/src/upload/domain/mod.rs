pub mod upload_candidate;
pub mod upload_validator;
