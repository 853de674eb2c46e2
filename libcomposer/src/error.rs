//! Error types for the composer core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComposerError>;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Invalid attachment: {0}")]
    Validation(String),

    #[error("No attachment with id: {0}")]
    NotFound(String),

    #[error("Nothing to submit: draft has no text and no attachments")]
    EmptySubmission,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
