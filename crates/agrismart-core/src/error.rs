//! Error types for the AgriSmart client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message shown when a required form field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all the fields before submitting.";

/// Generic message shown for transport-level failures. The underlying cause
/// is logged, never displayed.
pub const TRANSPORT_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Fallback shown when the backend rejects a request without an error body.
pub const BACKEND_FALLBACK_MESSAGE: &str = "Request failed.";

/// A shared error type for the entire AgriSmart client.
///
/// The variants mirror the client's error taxonomy: validation errors are
/// caught before any network call, backend errors carry the server's own
/// message, transport errors never expose their cause to the user, and
/// config errors are raised before attempting a call.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AgriError {
    /// Required form input missing or malformed; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend responded with a non-success status.
    #[error("Backend error ({status:?}): {message}")]
    Backend {
        status: Option<u16>,
        message: String,
    },

    /// No response was obtained at all (connection refused, timeout,
    /// unparsable body).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Required external configuration is absent or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl AgriError {
    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Validation error with the fixed missing-fields message.
    pub fn missing_fields() -> Self {
        Self::Validation(MISSING_FIELDS_MESSAGE.to_string())
    }

    /// Creates a Backend error from a status code and server message.
    pub fn backend(status: impl Into<Option<u16>>, message: impl Into<String>) -> Self {
        Self::Backend {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Creates a Transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this is a Validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Backend error.
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }

    /// Check if this is a Transport error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a Config error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The string a screen displays for this error.
    ///
    /// Validation, backend, and config messages are surfaced verbatim.
    /// Transport causes are replaced by a fixed retry suggestion; the
    /// original cause belongs in the log only.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Backend { message, .. } => {
                if message.is_empty() {
                    BACKEND_FALLBACK_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            Self::Transport { message } => {
                tracing::warn!("transport failure: {}", message);
                TRANSPORT_MESSAGE.to_string()
            }
            Self::Config(message) => message.clone(),
            Self::Io { .. } | Self::Serialization { .. } => TRANSPORT_MESSAGE.to_string(),
        }
    }
}

impl From<std::io::Error> for AgriError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AgriError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AgriError>`.
pub type Result<T> = std::result::Result<T, AgriError>;
