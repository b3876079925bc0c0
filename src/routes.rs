// Route path constants - single source of truth for all API paths

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

use crate::handlers::object_handler;
use crate::state::AppState;

pub const OBJECT_ITEM: &str = "/objects/{*key}";

/// Build the service router
///
/// Every method is routed to the same handler so that key validation runs
/// before method dispatch. Paths outside `/objects/` fall through to the
/// default empty 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(OBJECT_ITEM, any(object_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
