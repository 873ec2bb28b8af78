//! Error types for the file-handling surface
//!
//! Generation itself never errors through this type: infeasible or exhausted
//! requests come back as structured `{"error": ...}` payloads. This enum
//! covers the CLI's surroundings, reading requests and writing responses.

use std::fmt;
use std::path::PathBuf;

/// Main error type for CLI operations
#[derive(Debug)]
pub enum FleetError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to read a request from standard input
    StdinRead {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CLI argument validation failed
    InvalidArgument {
        /// Name of the invalid argument
        argument: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::StdinRead { source } => {
                write!(f, "Failed to read request from stdin: {source}")
            }
            Self::InvalidArgument {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{argument}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::StdinRead { source } => Some(source),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// Convenience type alias for CLI results
pub type Result<T> = std::result::Result<T, FleetError>;

/// Create a file system error with the failing path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> FleetError {
    FleetError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_display() {
        let err = file_system_error(
            "requests/board.json",
            "read",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );

        let message = err.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("requests/board.json"));
    }

    #[test]
    fn test_source_chain() {
        let err = FleetError::StdinRead {
            source: std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
        };
        assert!(std::error::Error::source(&err).is_some());

        let err = FleetError::InvalidArgument {
            argument: "seed",
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(std::error::Error::source(&err).is_none());
    }
}
