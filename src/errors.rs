//! Error types for homy
//!
//! Each error type has a corresponding error code for programmatic handling.
//! A rejected status transition is not an error: it is reported through
//! `TransitionOutcome::Blocked`.

use thiserror::Error;

/// Result type alias for homy operations
pub type Result<T> = std::result::Result<T, HomyError>;

/// Main error type for all homy operations
#[derive(Debug, Error)]
pub enum HomyError {
    /// No booking with the given id in the store or on the backend
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// No catalogue service with the given id or name
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Operator input rejected before reaching the backend
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A status string that is not one of the four booking statuses
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport-level HTTP failure (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend rejected the credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Booking status transition error
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl HomyError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            HomyError::BookingNotFound(_) => "BOOKING_NOT_FOUND",
            HomyError::ServiceNotFound(_) => "SERVICE_NOT_FOUND",
            HomyError::InvalidInput(_) => "INVALID_INPUT",
            HomyError::InvalidStatus(_) => "INVALID_STATUS",
            HomyError::InvalidJson(_) => "INVALID_JSON",
            HomyError::FileNotFound(_) => "FILE_NOT_FOUND",
            HomyError::ConfigError(_) => "CONFIG_ERROR",
            HomyError::Http(_) => "HTTP_ERROR",
            HomyError::Api { .. } => "API_ERROR",
            HomyError::Unauthorized(_) => "UNAUTHORIZED",
            HomyError::StateTransition(_) => "STATE_TRANSITION",
            HomyError::Interrupted => "INTERRUPTED",
            HomyError::Io(_) => "IO_ERROR",
            HomyError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        HomyError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for HomyError {
    fn from(error: reqwest::Error) -> Self {
        HomyError::Http(error.to_string())
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &HomyError) -> i32 {
    match error {
        HomyError::Interrupted => 130, // Standard Unix exit code for SIGINT
        HomyError::StateTransition(_) => 2,
        _ => 1,
    }
}
