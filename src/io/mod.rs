//! Request/response contracts and the command-line surface

/// Command-line interface for serving generation requests
pub mod cli;
/// Defaults and limits as named constants
pub mod configuration;
/// Error types for the file-handling surface
pub mod error;
/// Lenient request normalization
pub mod request;
/// Response serialization and the top-level entry point
pub mod response;
