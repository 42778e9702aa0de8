//! Route definitions for ideas.
//!
//! Mounted at `/ideas` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{experiments, ideas};
use crate::state::AppState;

/// Idea routes.
///
/// ```text
/// POST   /                      -> create_idea
/// GET    /                      -> list_ideas
/// GET    /summary               -> idea_summary
/// GET    /{id}                  -> get_idea
/// PUT    /{id}                  -> update_idea
/// PUT    /{id}/status           -> update_idea_status
/// POST   /{id}/experiments      -> create_experiment
/// GET    /{id}/experiments      -> list_idea_experiments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/summary", get(ideas::idea_summary))
        .route("/{id}", get(ideas::get_idea).put(ideas::update_idea))
        .route("/{id}/status", put(ideas::update_idea_status))
        .route(
            "/{id}/experiments",
            get(experiments::list_idea_experiments).post(experiments::create_experiment),
        )
}
