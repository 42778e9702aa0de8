//! Route definitions for experiments.
//!
//! Mounted at `/experiments` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{experiments, outcomes};
use crate::state::AppState;

/// ```text
/// GET    /{id}                  -> get_experiment
/// POST   /{id}/outcome          -> record_outcome
/// GET    /{id}/outcome          -> get_experiment_outcome
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(experiments::get_experiment))
        .route(
            "/{id}/outcome",
            get(outcomes::get_experiment_outcome).post(outcomes::record_outcome),
        )
}
