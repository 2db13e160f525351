//! Session setup errors
//!
//! Everything here is fatal to session creation. Once a session is running,
//! invalid input degrades to a no-op instead of an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Layout overflow: could not place {requested} tiles after {attempts} attempts")]
    LayoutOverflow { requested: usize, attempts: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SetupError {
    /// Shorthand for a configuration failure
    pub fn config(msg: impl Into<String>) -> Self {
        SetupError::Configuration(msg.into())
    }
}

/// Convenience type alias for Results with SetupError
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = SetupError::config("no tile identities available");
        assert_eq!(err.to_string(), "Configuration error: no tile identities available");

        let err = SetupError::LayoutOverflow {
            requested: 12,
            attempts: 12000,
        };
        assert_eq!(
            err.to_string(),
            "Layout overflow: could not place 12 tiles after 12000 attempts"
        );
    }
}
