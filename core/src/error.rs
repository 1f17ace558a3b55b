//! Error types for the API clients and the views.
//!
//! # Design
//! Status codes are not interpreted beyond success/failure: a 404 and a 500
//! both land in `HttpError` with the raw status and body for the logs. The
//! host executor reports network failures as `Transport`, so the views see a
//! single error type for everything that can go wrong with a remote call.

use thiserror::Error;

use crate::messages;

/// Failure of a remote call, from building the request to parsing the reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Client-side rejection of a task name. `Display` is the alert copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::EMPTY_NAME)]
    EmptyName,

    #[error("{}", messages::DUPLICATE_NAME)]
    DuplicateName,
}

/// A wire record that could not be turned into a `Task`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record id {0:?} is not an integer")]
    InvalidId(String),

    #[error("record {0} has neither `task` nor `name`")]
    MissingName(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_alert_copy() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Tên công việc không được để trống"
        );
        assert_eq!(
            ValidationError::DuplicateName.to_string(),
            "Tên công việc không được trùng"
        );
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = ApiError::HttpError {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: down");
    }
}
