//! Error taxonomy for API calls and session transitions.
//!
//! ERROR HANDLING
//! ==============
//! The session controller collapses every failure into the anonymous state,
//! so these types mostly travel back to UI callers (e.g. the login form) that
//! decide which message to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the credential or bearer token.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },
    /// The server rejected the request payload or target.
    #[error("invalid request ({status}): {message}")]
    Validation { status: u16, message: String },
    /// Any other non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the `{"error": "..."}` message the API attaches to failures.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

impl ApiError {
    /// Classify a non-success response by status code.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = error_message(status, body);
        match status {
            401 | 403 => Self::Auth { status, message },
            400 | 404 | 409 | 422 => Self::Validation { status, message },
            _ => Self::Server { status, message },
        }
    }

    /// Whether the server rejected the credential itself.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Text suitable for a toast or inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Não foi possível conectar ao servidor.".to_owned(),
            Self::Decode(_) => "Resposta inesperada do servidor.".to_owned(),
            Self::Auth { message, .. } | Self::Validation { message, .. } | Self::Server { message, .. } => {
                message.clone()
            }
        }
    }
}

/// Failure of a session transition that callers may need to distinguish.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// `refresh` was called on a session configured without refresh tokens.
    #[error("refresh tokens are disabled for this session")]
    RefreshUnavailable,
    /// `refresh` was called with no refresh token held.
    #[error("no refresh token available")]
    MissingRefreshToken,
}
