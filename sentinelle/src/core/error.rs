//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! Every backend failure is classified into a closed set of kinds derived
//! from the HTTP status code, never from message matching. Each kind maps to
//! a short title and a user-facing message; backend-provided messages are
//! preserved where they are more specific (validation, login rejection).
//!
//! ## Error Categories
//!
//! - **Network**: the server could not be reached (DNS, connect, timeout)
//! - **Unauthorized**: 401 — token missing, expired or rejected
//! - **Forbidden**: 403 — authenticated but not allowed
//! - **Validation**: 400/422 — the request was understood but rejected
//! - **Server**: 5xx — backend-side failure
//! - **Unknown**: everything else, including unparseable responses

use thiserror::Error;

/// Convenience alias used throughout the services and app layers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Classified backend failure. The payload carries the backend's own error
/// message when one was present in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Classify a non-success HTTP status. `message` is the backend error
    /// body when it could be parsed, otherwise the status reason phrase.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            400 | 422 => ApiError::Validation(message),
            500..=599 => ApiError::Server(message),
            _ => ApiError::Unknown(message),
        }
    }

    /// Classify a transport-level failure from `reqwest`.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            ApiError::Network(err.to_string())
        } else if err.is_decode() {
            ApiError::Unknown(format!("failed to parse response: {err}"))
        } else {
            ApiError::Unknown(err.to_string())
        }
    }

    /// Short title for notifications.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Connection problem",
            ApiError::Unauthorized(_) => "Session expired",
            ApiError::Forbidden(_) => "Access denied",
            ApiError::Validation(_) => "Invalid input",
            ApiError::Server(_) => "Server error",
            ApiError::Unknown(_) => "Unexpected error",
        }
    }

    /// Message shown to the user. Falls back to a canned sentence when the
    /// backend sent nothing useful.
    pub fn user_message(&self) -> String {
        let (detail, fallback) = match self {
            ApiError::Network(_) => {
                return "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Unauthorized(m) => (m, "Your session has expired. Please sign in again."),
            ApiError::Forbidden(m) => (m, "You do not have permission to do that."),
            ApiError::Validation(m) => (m, "The request was rejected. Check the entered values."),
            ApiError::Server(_) => {
                return "The server hit an internal error. Try again in a moment.".to_string()
            }
            ApiError::Unknown(m) => (m, "Something went wrong. Try again."),
        };
        if detail.trim().is_empty() {
            fallback.to_string()
        } else {
            detail.clone()
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// True for rejections that make the current session unusable.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Forbidden(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_status_code() {
        assert!(matches!(
            ApiError::from_status(401, "expired".into()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(403, "no".into()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from_status(422, "bad".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(400, "bad".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(503, "busy".into()),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(418, "teapot".into()),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = ApiError::Unauthorized("Invalid phone number or password".into());
        assert_eq!(err.user_message(), "Invalid phone number or password");

        let err = ApiError::Unauthorized("  ".into());
        assert_eq!(
            err.user_message(),
            "Your session has expired. Please sign in again."
        );
    }

    #[test]
    fn network_and_server_messages_are_canned() {
        let err = ApiError::Network("tcp connect error".into());
        assert!(err.user_message().starts_with("Could not reach the server"));
        let err = ApiError::Server("stack trace".into());
        assert!(err.user_message().starts_with("The server hit an internal error"));
    }
}
