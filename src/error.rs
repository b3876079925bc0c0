use axum::{
    extract::rejection::PathRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::key::{KeyError, ObjectKey};

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Custom error type for the object endpoints
///
/// Invalid keys and missing objects both surface as a bare 404 so clients
/// cannot tell a malformed key from one that was never written.
#[derive(Debug)]
pub enum ApiError {
    /// Path could not be decoded into a key candidate
    MalformedPath(PathRejection),
    /// Path segment is not a valid object key
    InvalidKey(KeyError),
    /// Key is valid but nothing is stored under it
    ObjectNotFound(ObjectKey),
    /// Request body could not be read in full
    BodyRead(axum::Error),
    /// Anything other than GET or PUT
    MethodNotAllowed(Method),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedPath(rejection) => {
                tracing::debug!("Rejected object path: {}", rejection);
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::InvalidKey(err) => {
                tracing::debug!("Rejected object key: {}", err);
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::ObjectNotFound(key) => {
                tracing::debug!("Object not found with key: {}", key);
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::BodyRead(err) => {
                tracing::warn!("Failed to read request body: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            ApiError::MethodNotAllowed(method) => {
                tracing::debug!("Method not allowed: {}", method);
                (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE).into_response()
            }
        }
    }
}

impl From<KeyError> for ApiError {
    fn from(err: KeyError) -> Self {
        ApiError::InvalidKey(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedPath(rejection)
    }
}

impl From<axum::Error> for ApiError {
    fn from(err: axum::Error) -> Self {
        ApiError::BodyRead(err)
    }
}
