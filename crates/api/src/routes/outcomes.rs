//! Route definitions for outcomes and reflections.
//!
//! Mounted at `/outcomes` and `/reflections` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{outcomes, reflections};
use crate::state::AppState;

/// ```text
/// GET    /{id}                  -> get_outcome
/// POST   /{id}/reflections      -> create_reflection
/// GET    /{id}/reflections      -> list_reflections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(outcomes::get_outcome))
        .route(
            "/{id}/reflections",
            get(reflections::list_reflections).post(reflections::create_reflection),
        )
}

/// ```text
/// GET    /{id}                  -> get_reflection
/// ```
pub fn reflections_router() -> Router<AppState> {
    Router::new().route("/{id}", get(reflections::get_reflection))
}
