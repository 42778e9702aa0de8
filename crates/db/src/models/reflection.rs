//! Reflection model and DTO.

use serde::{Deserialize, Serialize};

use echoroom_core::types::{EntityId, Timestamp};

/// A written reflection on an outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reflection {
    pub id: EntityId,
    pub outcome_id: EntityId,
    pub content: String,
    pub author_id: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateReflection {
    pub content: String,
}
