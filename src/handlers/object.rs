use crate::error::ApiError;
use crate::handlers::{get_object, put_object};
use crate::key::ObjectKey;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::Method,
    response::Response,
};

/// ANY /objects/{key} handler - Validate the key, then dispatch on method
///
/// The key is checked before the method, so an invalid key answers 404
/// even for methods that would otherwise get 405. The body is only read
/// once a PUT to a valid key has been established.
pub async fn object_handler(
    State(state): State<AppState>,
    method: Method,
    key: Result<Path<String>, PathRejection>,
    body: Body,
) -> Result<Response, ApiError> {
    let Path(raw_key) = key?;
    let key = ObjectKey::parse(&raw_key)?;

    match method {
        Method::PUT => put_object(&state.store, key, body).await,
        Method::GET => get_object(&state.store, key).await,
        other => Err(ApiError::MethodNotAllowed(other)),
    }
}
