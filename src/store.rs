use axum::body::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::key::ObjectKey;

/// Shareable in-memory object store for use across async handlers
///
/// The whole map sits behind a single `RwLock`: lookups share the lock,
/// writes take it exclusively. Values are `Bytes`, so a read hands out a
/// reference-counted view of a fully written buffer.
#[derive(Clone, Default)]
pub struct ObjectStore {
    inner: Arc<RwLock<HashMap<ObjectKey, Bytes>>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the object stored under `key`
    ///
    /// Returns `true` when an existing object was replaced.
    pub async fn put(&self, key: ObjectKey, value: Bytes) -> bool {
        let mut objects = self.inner.write().await;
        let len = value.len();
        let replaced = objects.insert(key.clone(), value).is_some();

        tracing::debug!("Stored {} bytes under key: {} (replaced: {})", len, key, replaced);
        replaced
    }

    /// Read the object stored under `key`
    ///
    /// # Returns
    /// * `Some(bytes)` - Object found
    /// * `None` - Nothing has been stored under this key
    pub async fn get(&self, key: &ObjectKey) -> Option<Bytes> {
        self.inner.read().await.get(key).cloned()
    }

    /// Number of keys currently holding an object
    pub async fn object_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
