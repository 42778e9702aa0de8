//! Handlers for reflections on outcomes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use echoroom_core::validation;
use echoroom_db::models::reflection::CreateReflection;
use echoroom_db::repositories::ReflectionRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /outcomes/{id}/reflections
// ---------------------------------------------------------------------------

pub async fn create_reflection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(outcome_id): Path<String>,
    ApiJson(input): ApiJson<CreateReflection>,
) -> AppResult<impl IntoResponse> {
    validation::validate_reflection_form(&input.content)?;

    let reflection =
        ReflectionRepo::create(&state.pool, &outcome_id, &auth.user_id, &input.content).await?;

    tracing::info!(
        reflection_id = %reflection.id,
        outcome_id = %outcome_id,
        user_id = %auth.user_id,
        "Reflection created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: reflection })))
}

// ---------------------------------------------------------------------------
// GET /outcomes/{id}/reflections
// ---------------------------------------------------------------------------

pub async fn list_reflections(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(outcome_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let reflections = ReflectionRepo::list_for_outcome(&state.pool, &outcome_id).await?;
    Ok(Json(DataResponse { data: reflections }))
}

// ---------------------------------------------------------------------------
// GET /reflections/{id}
// ---------------------------------------------------------------------------

pub async fn get_reflection(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let reflection = ReflectionRepo::get(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: reflection }))
}
