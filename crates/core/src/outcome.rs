//! Outcome results recorded at the end of an experiment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::invalid_outcome_result_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeResult {
    Success,
    Mixed,
    Failed,
}

impl OutcomeResult {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeResult::Success => "Success",
            OutcomeResult::Mixed => "Mixed",
            OutcomeResult::Failed => "Failed",
        }
    }
}

impl fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeResult {
    type Err = CoreError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(OutcomeResult::Success),
            "Mixed" => Ok(OutcomeResult::Mixed),
            "Failed" => Ok(OutcomeResult::Failed),
            other => Err(CoreError::Validation(invalid_outcome_result_message(other))),
        }
    }
}
