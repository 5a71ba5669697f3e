//! Error types for PetFriends client operations.
//!
//! Remote outcomes (200, 400, 403, ...) are never errors here: every client
//! operation hands back an [`ApiResponse`](crate::ApiResponse) so scenarios can
//! assert on the status. [`PetError`] covers what goes wrong on our side of the
//! wire:
//! - Configuration errors (missing credentials, malformed base URL)
//! - Transport failures (DNS, TLS, connection reset, timeout)
//! - Photo files that cannot be read
//! - Bodies that do not decode into the expected type
//! - Unknown scenario names passed to the runner
//!
//! # Example
//!
//! ```rust,no_run
//! use pet_friends::{PetError, error::ErrorCategory};
//!
//! fn report(err: &PetError) {
//!     match err.category() {
//!         ErrorCategory::Client => println!("fix the setup: {err}"),
//!         ErrorCategory::External => println!("service or network issue: {err}"),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

/// High-level categorization of errors for reporting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller can fix it: configuration, fixture files, scenario names.
    Client,

    /// The remote service or the network misbehaved.
    External,
}

/// Convenient result type for client operations.
pub type PetResult<T> = std::result::Result<T, PetError>;

/// Errors that can occur while talking to the PetFriends API.
///
/// Use the constructor methods, which log at the appropriate level:
///
/// ```rust
/// use pet_friends::PetError;
///
/// let err = PetError::configuration_error("PET_FRIENDS_EMAIL is not set");
/// assert!(err.to_string().contains("PET_FRIENDS_EMAIL"));
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `RequestFailed` | External |
/// | `PhotoUnavailable` | Client |
/// | `ResponseParsingError` | External |
/// | `UnknownScenario` | Client |
#[derive(Error, Debug)]
pub enum PetError {
    /// Client or suite configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP exchange did not complete.
    ///
    /// The service never produced a status code: connection refused, TLS
    /// failure, request timeout and the like.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A photo file could not be read for upload.
    #[error("Photo {path} is unavailable: {source}")]
    PhotoUnavailable {
        /// Path that was attempted.
        path: PathBuf,
        /// The I/O error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// A response body did not match the expected shape.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// A scenario name that is not in the catalog.
    #[error("Unknown scenario: {name}")]
    UnknownScenario {
        /// The name that was requested.
        name: String,
    },
}

impl PetError {
    /// Get the error category for reporting decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::PhotoUnavailable { .. } => ErrorCategory::Client,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::UnknownScenario { .. } => ErrorCategory::Client,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request did not complete"
        );
        Self::RequestFailed { message, source }
    }

    pub fn photo_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "photo_unavailable",
            path = %path.display(),
            error = %source,
            "Pet photo could not be read"
        );
        Self::PhotoUnavailable { path, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        let name = name.into();
        log_warn!(
            error_type = "unknown_scenario",
            scenario = %name,
            "Requested scenario is not in the catalog"
        );
        Self::UnknownScenario { name }
    }
}

impl From<reqwest::Error> for PetError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out: {error}")
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };
        Self::request_failed(message, Some(Box::new(error)))
    }
}
