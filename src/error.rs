//! Custom error types for barber-cli
//!
//! This module defines the error hierarchy for the client using thiserror.
//! Every failure a user action can produce maps onto one of these variants
//! and is rendered as a message at the command boundary.

use thiserror::Error;

/// The main error type for barber-cli operations
#[derive(Error, Debug)]
pub enum BarberError {
    /// A required field is missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login, registration, Google exchange or token refresh was rejected
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The session is gone and the user has to sign in again
    #[error("{0}")]
    SessionExpired(String),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response that no other variant covers
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Local persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl BarberError {
    /// Session error raised when a 401 arrives and no refresh token is stored
    pub fn authentication_required() -> Self {
        Self::SessionExpired("Authentication required".into())
    }

    /// Session error raised when the refresh or the retried request fails
    pub fn session_expired() -> Self {
        Self::SessionExpired("Session expired".into())
    }

    /// Build an HTTP error from a status and an optional server message
    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::Http {
            status,
            message: message.unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        }
    }

    /// Create a "not found" error for barbershops
    pub fn barbershop_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Barbershop",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for barbers
    pub fn barber_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Barber",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for services
    pub fn service_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Service",
            identifier: identifier.into(),
        }
    }

    /// Check if this error forces the user back to the landing page
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Route the user should be sent to after this error
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::SessionExpired(_) => Some(crate::router::LANDING),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BarberError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BarberError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for barber-cli operations
pub type BarberResult<T> = Result<T, BarberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BarberError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_http_error_uses_server_message() {
        let err = BarberError::http(409, Some("Slot already taken".into()));
        assert_eq!(err.to_string(), "Slot already taken");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_http_error_falls_back_to_status() {
        let err = BarberError::http(500, None);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_session_errors_redirect_to_landing() {
        let err = BarberError::authentication_required();
        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), "Authentication required");
        assert_eq!(err.redirect(), Some("/"));

        assert_eq!(BarberError::session_expired().to_string(), "Session expired");
        assert_eq!(BarberError::Auth("nope".into()).redirect(), None);
    }

    #[test]
    fn test_not_found_error() {
        let err = BarberError::barber_not_found("b9");
        assert_eq!(err.to_string(), "Barber not found: b9");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BarberError = io_err.into();
        assert!(matches!(err, BarberError::Io(_)));
    }
}
