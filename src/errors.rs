use thiserror::Error;

/// Main error type for the selector-extractor crate
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Failed to write output to {path}: {message}")]
    OutputError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
