use crate::error::ApiError;
use crate::key::ObjectKey;
use crate::store::ObjectStore;
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// PUT /objects/{key} - Store the request body under a validated key
///
/// The body is read in full before the store is touched, so a failed read
/// never leaves a partial object behind. No size limit is applied.
pub async fn put_object(
    store: &ObjectStore,
    key: ObjectKey,
    body: Body,
) -> Result<Response, ApiError> {
    let data = axum::body::to_bytes(body, usize::MAX).await?;
    let size = data.len();

    let replaced = store.put(key.clone(), data).await;

    tracing::info!(
        "Successfully stored object with key: {} ({} bytes, replaced: {}, {} objects held)",
        key,
        size,
        replaced,
        store.object_count().await
    );
    Ok(StatusCode::OK.into_response())
}
