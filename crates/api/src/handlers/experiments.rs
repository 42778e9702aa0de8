//! Handlers for experiments.
//!
//! An approved idea is promoted by posting an experiment under it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use echoroom_db::models::experiment::CreateExperiment;
use echoroom_db::repositories::ExperimentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /ideas/{id}/experiments
// ---------------------------------------------------------------------------

/// Promote an approved idea to an experiment.
pub async fn create_experiment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
    ApiJson(input): ApiJson<CreateExperiment>,
) -> AppResult<impl IntoResponse> {
    let new_experiment = input.validate()?;

    let experiment =
        ExperimentRepo::create(&state.pool, &idea_id, &auth.user_id, new_experiment).await?;

    tracing::info!(
        experiment_id = %experiment.id,
        idea_id = %idea_id,
        user_id = %auth.user_id,
        "Experiment created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: experiment })))
}

// ---------------------------------------------------------------------------
// GET /ideas/{id}/experiments
// ---------------------------------------------------------------------------

pub async fn list_idea_experiments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let experiments = ExperimentRepo::list_for_idea(&state.pool, &idea_id).await?;
    Ok(Json(DataResponse { data: experiments }))
}

// ---------------------------------------------------------------------------
// GET /experiments/{id}
// ---------------------------------------------------------------------------

pub async fn get_experiment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let experiment = ExperimentRepo::get(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: experiment }))
}
