//! Error types for qadmin.

use crate::api::ApiError;
use crate::record::ValidationError;
use thiserror::Error;

/// A shared error type for the whole qadmin workspace.
///
/// API failures keep their `ApiError` (message + optional status) so callers
/// can still tell a transport failure from a service-level one.
#[derive(Error, Debug, Clone)]
pub enum QadminError {
    /// An operation needing credentials was attempted while logged out
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The remote service rejected the credentials (HTTP 401); the session
    /// has already been torn down when this is returned
    #[error("Session expired: {0}")]
    SessionExpired(ApiError),

    /// Any other remote failure
    #[error("{0}")]
    Api(ApiError),

    /// Client-side record validation failed before submission
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Credential or config persistence failed
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QadminError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// The underlying API error, if this failure came from the remote service.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::SessionExpired(err) | Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if the session was torn down because of this error
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }

    /// Check if the remote service reported the record as absent (HTTP 404).
    ///
    /// The edit flow uses this to navigate away instead of showing an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_not_found())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message suitable for display next to the failed action.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthenticated => "Please log in.".to_string(),
            Self::SessionExpired(_) => "Session expired. Please log in again.".to_string(),
            Self::Api(err) => err.message().to_string(),
            Self::Validation(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for QadminError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for QadminError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QadminError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for QadminError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, QadminError>`.
pub type Result<T> = std::result::Result<T, QadminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_only_for_plain_api_404() {
        let not_found = QadminError::Api(ApiError::service(404, "Failed to fetch QA record: 404 Not Found"));
        assert!(not_found.is_not_found());

        let server = QadminError::Api(ApiError::service(500, "boom"));
        assert!(!server.is_not_found());

        let transport = QadminError::Api(ApiError::transport("Network error while fetching QA record"));
        assert!(!transport.is_not_found());
    }

    #[test]
    fn test_user_message_uses_api_message() {
        let err = QadminError::Api(ApiError::service(500, "Failed to create QA record: 500 Internal Server Error"));
        assert_eq!(
            err.user_message(),
            "Failed to create QA record: 500 Internal Server Error"
        );
        assert_eq!(err.api_error().and_then(|e| e.status()), Some(500));
    }

    #[test]
    fn test_io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: QadminError = io.into();
        assert!(matches!(err, QadminError::Storage { .. }));
    }
}
