//! Handlers for ideas.
//!
//! Provides endpoints for submitting, listing, reading, editing, and moving
//! ideas through their lifecycle. Edits and status changes carry the
//! caller's `expected_version`; a stale version yields 409 and the client is
//! expected to reload and retry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use echoroom_core::idea::{IdeaStatus, StateTransition};
use echoroom_core::listing::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use echoroom_core::validation;
use echoroom_db::models::idea::{
    CreateIdea, Idea, IdeaFilter, IdeaListParams, UpdateIdea, UpdateIdeaStatus,
};
use echoroom_db::repositories::IdeaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::extract::{ApiJson, ApiQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /ideas
// ---------------------------------------------------------------------------

/// Submit a new idea. It starts in `draft` at version 0.
pub async fn create_idea(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateIdea>,
) -> AppResult<impl IntoResponse> {
    validation::validate_idea_form(&input.title, &input.description)?;

    let idea = IdeaRepo::create(&state.pool, &auth.user_id, &input).await;

    tracing::info!(idea_id = %idea.id, user_id = %auth.user_id, "Idea created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: idea })))
}

// ---------------------------------------------------------------------------
// GET /ideas
// ---------------------------------------------------------------------------

/// List ideas filtered by status, author, and creation range.
pub async fn list_ideas(
    _auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdeaListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = IdeaFilter::from_params(&params)?;
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT) as usize;
    let offset = clamp_offset(params.offset) as usize;

    let ideas: Vec<Idea> = IdeaRepo::list(&state.pool, filter)
        .await
        .skip(offset)
        .take(limit)
        .collect();

    Ok(Json(DataResponse { data: ideas }))
}

// ---------------------------------------------------------------------------
// GET /ideas/summary
// ---------------------------------------------------------------------------

/// Number of ideas per status, for the dashboard.
pub async fn idea_summary(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = IdeaRepo::status_counts(&state.pool).await;
    Ok(Json(DataResponse { data: counts }))
}

// ---------------------------------------------------------------------------
// GET /ideas/{id}
// ---------------------------------------------------------------------------

pub async fn get_idea(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let idea = IdeaRepo::get(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: idea }))
}

// ---------------------------------------------------------------------------
// PUT /ideas/{id}
// ---------------------------------------------------------------------------

/// Edit an idea's title and/or description.
pub async fn update_idea(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateIdea>,
) -> AppResult<impl IntoResponse> {
    if input.title.is_none() && input.description.is_none() {
        return Err(AppError::BadRequest(
            "At least one of title or description must be provided".into(),
        ));
    }
    if let Some(ref title) = input.title {
        validation::validate_title(title).into_result()?;
    }
    if let Some(ref description) = input.description {
        validation::validate_description(description).into_result()?;
    }

    let updated = IdeaRepo::update(&state.pool, &id, &input).await?;

    tracing::info!(
        idea_id = %id,
        version = updated.version,
        user_id = %auth.user_id,
        "Idea updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// PUT /ideas/{id}/status
// ---------------------------------------------------------------------------

/// Move an idea along its lifecycle.
pub async fn update_idea_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateIdeaStatus>,
) -> AppResult<impl IntoResponse> {
    let target_status: IdeaStatus = input.status.parse()?;

    let request = StateTransition {
        idea_id: id,
        from_version: input.expected_version,
        target_status,
    };
    let updated = IdeaRepo::transition(&state.pool, &request).await?;

    tracing::info!(
        idea_id = %updated.id,
        to = %updated.status,
        version = updated.version,
        user_id = %auth.user_id,
        "Idea status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}
