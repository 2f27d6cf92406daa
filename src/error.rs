//! Error handling module for rigbuilder
//!
//! Provides centralized error types using thiserror. Wizard transitions and
//! the compatibility filter never fail; these errors cover file loading,
//! terminal setup, and the CLI surface.

use thiserror::Error;

/// Main error type for rigbuilder
#[derive(Error, Debug)]
pub enum RigError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog errors (duplicate ids, bad attributes, unknown part ids)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for rigbuilder operations
pub type Result<T> = std::result::Result<T, RigError>;

impl RigError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RigError::catalog("duplicate part id 'cpu-1'");
        assert_eq!(err.to_string(), "Catalog error: duplicate part id 'cpu-1'");

        let err = RigError::config("timeout must be positive");
        assert_eq!(err.to_string(), "Configuration error: timeout must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RigError = io_err.into();
        assert!(matches!(err, RigError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RigError = json_err.into();
        assert!(matches!(err, RigError::Json(_)));
    }
}
