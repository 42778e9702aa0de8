//! Handlers for experiment outcomes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use echoroom_db::models::outcome::CreateOutcome;
use echoroom_db::repositories::OutcomeRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /experiments/{id}/outcome
// ---------------------------------------------------------------------------

/// Record the outcome of an experiment. A second outcome is rejected with 409.
pub async fn record_outcome(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(experiment_id): Path<String>,
    ApiJson(input): ApiJson<CreateOutcome>,
) -> AppResult<impl IntoResponse> {
    let new_outcome = input.validate()?;

    let outcome =
        OutcomeRepo::create(&state.pool, &experiment_id, &auth.user_id, new_outcome).await?;

    tracing::info!(
        outcome_id = %outcome.id,
        experiment_id = %experiment_id,
        result = %outcome.result,
        user_id = %auth.user_id,
        "Outcome recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

// ---------------------------------------------------------------------------
// GET /experiments/{id}/outcome
// ---------------------------------------------------------------------------

/// The outcome of an experiment, or `{ "data": null }` if none is recorded yet.
pub async fn get_experiment_outcome(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(experiment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = OutcomeRepo::find_for_experiment(&state.pool, &experiment_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}

// ---------------------------------------------------------------------------
// GET /outcomes/{id}
// ---------------------------------------------------------------------------

pub async fn get_outcome(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = OutcomeRepo::get(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: outcome }))
}
