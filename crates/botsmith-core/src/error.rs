//! Error types for the botsmith engine

use thiserror::Error;

/// Result type alias for engine operations
pub type SmithResult<T> = Result<T, SmithError>;

/// Main error type for the synthesis engine
#[derive(Error, Debug, Clone)]
pub enum SmithError {
    /// Prompt was blank or whitespace-only. Callers are expected to
    /// reject this before invoking the pipeline; the pipeline checks
    /// anyway so the precondition cannot be silently violated.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl SmithError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<anyhow::Error> for SmithError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for SmithError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for SmithError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SmithError::EmptyPrompt.to_string(), "Prompt is empty");
        assert_eq!(
            SmithError::config("bad file").to_string(),
            "Configuration error: bad file"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SmithError = io.into();
        assert!(matches!(err, SmithError::Io(_)));
    }
}
