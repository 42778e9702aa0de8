pub mod experiments;
pub mod health;
pub mod ideas;
pub mod outcomes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ideas                                   list, create
/// /ideas/summary                           counts per status
/// /ideas/{id}                              get, edit
/// /ideas/{id}/status                       lifecycle transition
/// /ideas/{id}/experiments                  list, promote
///
/// /experiments/{id}                        get
/// /experiments/{id}/outcome                get, record
///
/// /outcomes/{id}                           get
/// /outcomes/{id}/reflections               list, create
///
/// /reflections/{id}                        get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Ideas and their lifecycle.
        .nest("/ideas", ideas::router())
        // Experiments promoted from approved ideas.
        .nest("/experiments", experiments::router())
        // Outcomes and the reflections written on them.
        .nest("/outcomes", outcomes::router())
        .nest("/reflections", outcomes::reflections_router())
}
