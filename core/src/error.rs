use thiserror::Error;

/// Main error type for Freebies
#[derive(Debug, Error)]
pub enum FreebiesError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Summary generation failed: {0}")]
    Generation(String),
}

/// Result type alias using FreebiesError
pub type Result<T> = std::result::Result<T, FreebiesError>;
