use crate::idea::IdeaStatus;
use crate::types::{EntityId, Version};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The caller's expected version is stale; it must reload and retry.
    #[error("Version conflict on {id}: expected {expected}, current {current}")]
    VersionConflict {
        id: EntityId,
        expected: Version,
        current: Version,
    },

    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: IdeaStatus, to: IdeaStatus },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
