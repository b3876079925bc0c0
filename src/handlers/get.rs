use crate::error::ApiError;
use crate::key::ObjectKey;
use crate::store::ObjectStore;
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /objects/{key} - Return the stored bytes as the whole response body
pub async fn get_object(store: &ObjectStore, key: ObjectKey) -> Result<Response, ApiError> {
    match store.get(&key).await {
        Some(data) => {
            tracing::info!("Successfully retrieved object with key: {}", key);
            // Raw body, no content type of our own
            Ok((StatusCode::OK, Body::from(data)).into_response())
        }
        None => Err(ApiError::ObjectNotFound(key)),
    }
}
