//! Repository for the ideas table.
//!
//! Every mutation takes the idea's own mutex, re-checks the caller's
//! expected version under that lock, and only then applies the change, so
//! the check-then-act sequence is atomic per idea.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use echoroom_core::error::CoreError;
use echoroom_core::idea::{self, IdeaStatus, StateTransition};
use echoroom_core::listing::{SortKey, SortOrder};

use crate::models::idea::{CreateIdea, Idea, IdeaFilter, IdeaStatusCount, UpdateIdea};
use crate::{new_id, Store};

/// Provides create, read, edit, transition, and listing for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new draft idea at version 0. Input must already be validated.
    pub async fn create(store: &Store, author_id: &str, input: &CreateIdea) -> Idea {
        let now = Utc::now();
        let idea = Idea {
            id: new_id(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            status: IdeaStatus::Draft,
            version: 0,
            author_id: author_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        store
            .ideas
            .write()
            .await
            .insert(idea.id.clone(), Arc::new(Mutex::new(idea.clone())));
        idea
    }

    /// Fetch a snapshot of an idea.
    pub async fn get(store: &Store, id: &str) -> Result<Idea, CoreError> {
        let record = Self::record(store, id).await?;
        let idea = record.lock().await;
        Ok(idea.clone())
    }

    /// Apply a status change if the caller's version is current and the edge
    /// is in the lifecycle table. On failure the record is left untouched.
    pub async fn transition(store: &Store, request: &StateTransition) -> Result<Idea, CoreError> {
        let record = Self::record(store, &request.idea_id).await?;
        let mut idea = record.lock().await;

        if let Err(err) = idea::check_transition(
            &idea.id,
            idea.status,
            idea.version,
            request.from_version,
            request.target_status,
        ) {
            tracing::debug!(
                idea_id = %idea.id,
                status = %idea.status,
                version = idea.version,
                error = %err,
                "Idea transition rejected",
            );
            return Err(err);
        }

        idea.status = request.target_status;
        idea.version += 1;
        idea.updated_at = Utc::now();
        Ok(idea.clone())
    }

    /// Edit title and/or description under the same version guard.
    /// Archived ideas are rejected with a conflict.
    pub async fn update(store: &Store, id: &str, input: &UpdateIdea) -> Result<Idea, CoreError> {
        let record = Self::record(store, id).await?;
        let mut idea = record.lock().await;

        idea::check_editable(&idea.id, idea.status, idea.version, input.expected_version)?;

        if let Some(ref title) = input.title {
            idea.title = title.trim().to_string();
        }
        if let Some(ref description) = input.description {
            idea.description = description.trim().to_string();
        }
        idea.version += 1;
        idea.updated_at = Utc::now();
        Ok(idea.clone())
    }

    /// Ideas matching `filter`, sorted by its key.
    ///
    /// The returned iterator is lazy and single-pass over a point-in-time
    /// snapshot; later mutations are not reflected in it.
    pub async fn list(store: &Store, filter: IdeaFilter) -> impl Iterator<Item = Idea> + Send {
        let mut ideas = Self::snapshot(store).await;

        // Stable sort on insertion-ordered data, so ties keep creation order.
        match filter.sort {
            SortKey::CreatedAt => ideas.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortKey::UpdatedAt => ideas.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
            SortKey::Title => ideas.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        if filter.order == SortOrder::Desc {
            ideas.reverse();
        }

        ideas.into_iter().filter(move |idea| filter.matches(idea))
    }

    /// Count ideas per status, in lifecycle order. Statuses with no ideas
    /// are included with a zero count.
    pub async fn status_counts(store: &Store) -> Vec<IdeaStatusCount> {
        let ideas = Self::snapshot(store).await;
        IdeaStatus::ALL
            .into_iter()
            .map(|status| IdeaStatusCount {
                status,
                count: ideas.iter().filter(|i| i.status == status).count(),
            })
            .collect()
    }

    /// Look up the shared handle for an idea without holding the table lock.
    pub(crate) async fn record(store: &Store, id: &str) -> Result<Arc<Mutex<Idea>>, CoreError> {
        store
            .ideas
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Idea",
                id: id.to_string(),
            })
    }

    async fn snapshot(store: &Store) -> Vec<Idea> {
        let records: Vec<Arc<Mutex<Idea>>> = store.ideas.read().await.values().cloned().collect();
        let mut ideas = Vec::with_capacity(records.len());
        for record in records {
            ideas.push(record.lock().await.clone());
        }
        ideas
    }
}
