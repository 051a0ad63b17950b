//! Error types for the Postman API client.
//!
//! # Design
//! Four outcomes are kept apart so callers can tell "the server told us what
//! went wrong" (`Remote`) from "we could not understand the response"
//! (`Deserialization`) and from failures that never produced a response at
//! all (`Transport`). Statuses outside the documented set land in
//! `UnexpectedStatus` without any body interpretation.

use std::fmt;

use serde::Deserialize;

/// Errors returned by `PostmanClient` lookups.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or executed (connection refused,
    /// timeout, invalid URL or header value, unreadable body).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The API answered with one of its documented error statuses and a
    /// well-formed error body.
    #[error("HTTP {status}: {error}")]
    Remote { status: u16, error: ErrorInfo },

    /// The response body did not match the expected JSON shape.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The server returned a status outside both the success and the
    /// documented error sets.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl ApiError {
    /// The remote-reported error, if the API classified this failure itself.
    pub fn remote(&self) -> Option<&ErrorInfo> {
        match self {
            ApiError::Remote { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Error details reported by the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}, message: {}", self.name, self.message)
    }
}

/// Body shape of every documented error status: `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_displays_name_and_message() {
        let err = ApiError::Remote {
            status: 404,
            error: ErrorInfo {
                name: "instanceNotFoundError".to_string(),
                message: "not here".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404: error: instanceNotFoundError, message: not here"
        );
        assert_eq!(err.remote().unwrap().name, "instanceNotFoundError");
    }

    #[test]
    fn unexpected_status_has_no_remote_details() {
        let err = ApiError::UnexpectedStatus(418);
        assert_eq!(err.to_string(), "unexpected status 418");
        assert!(err.remote().is_none());
    }

    #[test]
    fn error_response_rejects_missing_message() {
        let result: Result<ErrorResponse, _> =
            serde_json::from_str(r#"{"error":{"name":"X"}}"#);
        assert!(result.is_err());
    }
}
