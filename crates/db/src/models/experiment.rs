//! Experiment model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use echoroom_core::error::CoreError;
use echoroom_core::types::{EntityId, Timestamp};
use echoroom_core::validation;

/// An experiment promoted from an approved idea.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experiment {
    pub id: EntityId,
    pub idea_id: EntityId,
    pub title: String,
    pub hypothesis: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// DTO for promoting an idea. Dates arrive as `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize)]
pub struct CreateExperiment {
    pub title: String,
    pub hypothesis: String,
    pub start_date: String,
    pub end_date: String,
}

/// Validated insert for the experiments table.
#[derive(Debug, Clone)]
pub struct NewExperiment {
    pub title: String,
    pub hypothesis: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateExperiment {
    pub fn validate(&self) -> Result<NewExperiment, CoreError> {
        let (start_date, end_date) = validation::validate_experiment_form(
            &self.title,
            &self.hypothesis,
            &self.start_date,
            &self.end_date,
        )?;
        Ok(NewExperiment {
            title: self.title.trim().to_string(),
            hypothesis: self.hypothesis.trim().to_string(),
            start_date,
            end_date,
        })
    }
}
