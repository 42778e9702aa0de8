//! Repository for the experiments table.

use chrono::Utc;

use echoroom_core::error::CoreError;
use echoroom_core::idea::IdeaStatus;

use crate::models::experiment::{Experiment, NewExperiment};
use crate::repositories::IdeaRepo;
use crate::{new_id, Store};

pub struct ExperimentRepo;

impl ExperimentRepo {
    /// Promote an approved idea to an experiment.
    ///
    /// The idea's lock is held across the status check and the insert so the
    /// idea cannot be archived in between.
    pub async fn create(
        store: &Store,
        idea_id: &str,
        created_by: &str,
        input: NewExperiment,
    ) -> Result<Experiment, CoreError> {
        let record = IdeaRepo::record(store, idea_id).await?;
        let idea = record.lock().await;

        if idea.status != IdeaStatus::Approved {
            return Err(CoreError::Conflict(format!(
                "Only approved ideas can be promoted to experiments (idea {} is '{}')",
                idea.id, idea.status
            )));
        }

        let experiment = Experiment {
            id: new_id(),
            idea_id: idea.id.clone(),
            title: input.title,
            hypothesis: input.hypothesis,
            start_date: input.start_date,
            end_date: input.end_date,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        };
        store
            .experiments
            .write()
            .await
            .insert(experiment.id.clone(), experiment.clone());
        Ok(experiment)
    }

    pub async fn get(store: &Store, id: &str) -> Result<Experiment, CoreError> {
        store
            .experiments
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Experiment",
                id: id.to_string(),
            })
    }

    /// Experiments of one idea, oldest first. Fails if the idea is unknown.
    pub async fn list_for_idea(store: &Store, idea_id: &str) -> Result<Vec<Experiment>, CoreError> {
        IdeaRepo::record(store, idea_id).await?;
        Ok(store
            .experiments
            .read()
            .await
            .values()
            .filter(|e| e.idea_id == idea_id)
            .cloned()
            .collect())
    }
}
