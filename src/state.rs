use crate::store::ObjectStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ObjectStore,
}

impl AppState {
    pub fn new(store: ObjectStore) -> Self {
        Self { store }
    }
}
