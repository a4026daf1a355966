//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Validation
//! failures carry a plain-text reason back to the client; server-side
//! faults are returned as an opaque 500 with the detail kept in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller-supplied `count` is not a positive integer.
    #[error("invalid count specified")]
    InvalidCount,

    /// Persistence layer failure (insert or scan).
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCount => StatusCode::BAD_REQUEST,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::BAD_REQUEST {
            // Validation failures answer with a short plain-text reason.
            (status, self.to_string()).into_response()
        } else {
            // Server faults stay opaque on the wire; the detail goes to
            // the logs only.
            tracing::error!(error = %self, "request failed");
            status.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_count_maps_to_bad_request() {
        assert_eq!(
            ServiceError::InvalidCount.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn persistence_maps_to_internal_server_error() {
        assert_eq!(
            ServiceError::Persistence("db down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_count_message_is_stable() {
        assert_eq!(
            ServiceError::InvalidCount.to_string(),
            "invalid count specified"
        );
    }
}
