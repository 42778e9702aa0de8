//! Repository for the reflections table.

use chrono::Utc;

use echoroom_core::error::CoreError;

use crate::models::reflection::Reflection;
use crate::{new_id, Store};

pub struct ReflectionRepo;

impl ReflectionRepo {
    /// Attach a reflection to an outcome. `content` must already be validated.
    pub async fn create(
        store: &Store,
        outcome_id: &str,
        author_id: &str,
        content: &str,
    ) -> Result<Reflection, CoreError> {
        if !store.outcomes.read().await.contains_key(outcome_id) {
            return Err(CoreError::NotFound {
                entity: "Outcome",
                id: outcome_id.to_string(),
            });
        }

        let reflection = Reflection {
            id: new_id(),
            outcome_id: outcome_id.to_string(),
            content: content.trim().to_string(),
            author_id: author_id.to_string(),
            created_at: Utc::now(),
        };
        store
            .reflections
            .write()
            .await
            .insert(reflection.id.clone(), reflection.clone());
        Ok(reflection)
    }

    pub async fn get(store: &Store, id: &str) -> Result<Reflection, CoreError> {
        store
            .reflections
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Reflection",
                id: id.to_string(),
            })
    }

    /// Reflections on an outcome, oldest first.
    pub async fn list_for_outcome(
        store: &Store,
        outcome_id: &str,
    ) -> Result<Vec<Reflection>, CoreError> {
        if !store.outcomes.read().await.contains_key(outcome_id) {
            return Err(CoreError::NotFound {
                entity: "Outcome",
                id: outcome_id.to_string(),
            });
        }
        Ok(store
            .reflections
            .read()
            .await
            .values()
            .filter(|r| r.outcome_id == outcome_id)
            .cloned()
            .collect())
    }
}
