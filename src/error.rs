//! Error types for labbook

use thiserror::Error;

/// Main error type for the labbook application
#[derive(Debug, Error)]
pub enum LabbookError {
    #[error("No session with id {0}")]
    SessionNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("PDF export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LabbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LabbookError::SessionNotFound(_) => 2,
            LabbookError::Export(_) => 3,
            _ => 1,
        }
    }
}

/// Result type using LabbookError
pub type Result<T> = std::result::Result<T, LabbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_not_found_exit_code() {
        let err = LabbookError::SessionNotFound(42);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_export_exit_code() {
        let err = LabbookError::Export("disk full".to_string());
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_generic_exit_code() {
        let err = LabbookError::Config("bad key".to_string());
        assert_eq!(err.exit_code(), 1);
    }
}
