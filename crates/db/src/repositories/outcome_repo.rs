//! Repository for the outcomes table.

use chrono::Utc;

use echoroom_core::error::CoreError;

use crate::models::outcome::{NewOutcome, Outcome};
use crate::{new_id, Store};

pub struct OutcomeRepo;

impl OutcomeRepo {
    /// Record the outcome of an experiment. Each experiment gets at most one.
    pub async fn create(
        store: &Store,
        experiment_id: &str,
        recorded_by: &str,
        input: NewOutcome,
    ) -> Result<Outcome, CoreError> {
        if !store.experiments.read().await.contains_key(experiment_id) {
            return Err(CoreError::NotFound {
                entity: "Experiment",
                id: experiment_id.to_string(),
            });
        }

        // Check and insert under one write lock.
        let mut outcomes = store.outcomes.write().await;
        if outcomes.values().any(|o| o.experiment_id == experiment_id) {
            return Err(CoreError::Conflict(format!(
                "Experiment {experiment_id} already has an outcome"
            )));
        }

        let outcome = Outcome {
            id: new_id(),
            experiment_id: experiment_id.to_string(),
            result: input.result,
            notes: input.notes,
            recorded_by: recorded_by.to_string(),
            created_at: Utc::now(),
        };
        outcomes.insert(outcome.id.clone(), outcome.clone());
        Ok(outcome)
    }

    pub async fn get(store: &Store, id: &str) -> Result<Outcome, CoreError> {
        store
            .outcomes
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Outcome",
                id: id.to_string(),
            })
    }

    /// The outcome of an experiment, if one has been recorded.
    pub async fn find_for_experiment(
        store: &Store,
        experiment_id: &str,
    ) -> Result<Option<Outcome>, CoreError> {
        if !store.experiments.read().await.contains_key(experiment_id) {
            return Err(CoreError::NotFound {
                entity: "Experiment",
                id: experiment_id.to_string(),
            });
        }
        Ok(store
            .outcomes
            .read()
            .await
            .values()
            .find(|o| o.experiment_id == experiment_id)
            .cloned())
    }
}
