use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {}", .0.summary())]
    Validation(FieldErrors),

    #[error("Invalid file type for {slot}: expected {expected}, got {actual}")]
    InvalidFileType {
        slot: String,
        expected: String,
        actual: String,
    },

    #[error("Upload already in progress for {0}")]
    UploadInProgress(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;

// Commands hand errors back to the view layer as plain strings
impl serde::Serialize for StudioError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
