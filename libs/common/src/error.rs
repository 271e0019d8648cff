//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use thiserror::Error;

/// Application-wide error type
///
/// Nothing here is fatal to the process: a failed operation leaves the
/// current screen in place and the user retries or corrects input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Synchronous input-validation failure, surfaced inline on the form
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Device permission denied (camera, location); recoverable via retry
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Device absent or failed mid-use
    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Device request timed out
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Lookup miss (unknown city, unknown conversation)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed environment configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
