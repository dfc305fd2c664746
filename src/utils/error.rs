use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse fixture config '{path}': {message}")]
    ConfigParseError { path: String, message: String },
}

impl FixtureError {
    /// Short message suitable for stderr in the CLI.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FixtureError::IoError(e) => format!("Could not read or write a file: {}", e),
            FixtureError::SerializationError(e) => {
                format!("Could not serialize the document: {}", e)
            }
            FixtureError::ConfigParseError { path, .. } => {
                format!("Fixture config '{}' is not valid TOML", path)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
