//! Idea record model and DTOs.

use serde::{Deserialize, Serialize};

use echoroom_core::error::CoreError;
use echoroom_core::idea::IdeaStatus;
use echoroom_core::listing::{SortKey, SortOrder};
use echoroom_core::types::{EntityId, Timestamp, Version};

/// An idea as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Idea {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub status: IdeaStatus,
    pub version: Version,
    pub author_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a new idea.
#[derive(Debug, Deserialize)]
pub struct CreateIdea {
    pub title: String,
    pub description: String,
}

/// DTO for editing an idea's text fields under optimistic locking.
#[derive(Debug, Deserialize)]
pub struct UpdateIdea {
    pub expected_version: Version,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for a status change. `status` is parsed in the handler so an unknown
/// value surfaces as a validation error rather than a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateIdeaStatus {
    pub expected_version: Version,
    pub status: String,
}

/// Query parameters for listing ideas.
#[derive(Debug, Default, Deserialize)]
pub struct IdeaListParams {
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub created_from: Option<Timestamp>,
    pub created_to: Option<Timestamp>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Read-side filter applied by [`crate::repositories::IdeaRepo::list`].
///
/// `created_from` and `created_to` are both inclusive.
#[derive(Debug, Clone, Default)]
pub struct IdeaFilter {
    pub status: Option<IdeaStatus>,
    pub author_id: Option<String>,
    pub created_from: Option<Timestamp>,
    pub created_to: Option<Timestamp>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl IdeaFilter {
    /// Build a filter from raw query parameters, validating the status.
    pub fn from_params(params: &IdeaListParams) -> Result<Self, CoreError> {
        let status = params
            .status
            .as_deref()
            .map(str::parse::<IdeaStatus>)
            .transpose()?;

        if let (Some(from), Some(to)) = (params.created_from, params.created_to) {
            if to < from {
                return Err(CoreError::Validation(format!(
                    "created_to ({to}) must not be before created_from ({from})"
                )));
            }
        }

        Ok(Self {
            status,
            author_id: params.author_id.clone(),
            created_from: params.created_from,
            created_to: params.created_to,
            sort: params.sort.unwrap_or_default(),
            order: params.order.unwrap_or_default(),
        })
    }

    pub fn matches(&self, idea: &Idea) -> bool {
        self.status.map_or(true, |s| idea.status == s)
            && self
                .author_id
                .as_deref()
                .map_or(true, |a| idea.author_id == a)
            && self.created_from.map_or(true, |from| idea.created_at >= from)
            && self.created_to.map_or(true, |to| idea.created_at <= to)
    }
}

/// Number of ideas currently in a given status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaStatusCount {
    pub status: IdeaStatus,
    pub count: usize,
}
