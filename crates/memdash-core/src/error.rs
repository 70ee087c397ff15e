//! Error types for memdash

use thiserror::Error;

/// Result type alias for memdash operations
pub type MemdashResult<T> = Result<T, MemdashError>;

/// Main error type for memdash
#[derive(Error, Debug, Clone)]
pub enum MemdashError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status
    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl MemdashError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new HTTP transport error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Create a new backend error from a response status and body
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<anyhow::Error> for MemdashError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for MemdashError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for MemdashError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for MemdashError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = MemdashError::backend(503, "service unavailable");
        assert_eq!(
            err.to_string(),
            "Backend error (status 503): service unavailable"
        );
    }

    #[test]
    fn test_constructor_helpers() {
        assert!(matches!(
            MemdashError::config("missing url"),
            MemdashError::Config(_)
        ));
        assert!(matches!(
            MemdashError::invalid_input("bad index"),
            MemdashError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: MemdashError = parse_err.into();
        assert!(matches!(err, MemdashError::Json(_)));
    }
}
