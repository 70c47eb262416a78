use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error: file '{0}' not found")]
    MissingFile(String),

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Error converting file: {0}")]
    Conversion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
