//! Outcome model and DTOs.

use serde::{Deserialize, Serialize};

use echoroom_core::error::CoreError;
use echoroom_core::outcome::OutcomeResult;
use echoroom_core::types::{EntityId, Timestamp};
use echoroom_core::validation;

/// The recorded result of an experiment (at most one per experiment).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub id: EntityId,
    pub experiment_id: EntityId,
    pub result: OutcomeResult,
    pub notes: Option<String>,
    pub recorded_by: String,
    pub created_at: Timestamp,
}

/// DTO for recording an outcome. `result` must be exactly `Success`,
/// `Mixed`, or `Failed`.
#[derive(Debug, Deserialize)]
pub struct CreateOutcome {
    pub result: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOutcome {
    pub result: OutcomeResult,
    pub notes: Option<String>,
}

impl CreateOutcome {
    pub fn validate(&self) -> Result<NewOutcome, CoreError> {
        validation::validate_outcome_form(&self.result, self.notes.as_deref())?;
        Ok(NewOutcome {
            result: self.result.parse()?,
            notes: self.notes.clone(),
        })
    }
}
