//! Idea lifecycle: statuses, the transition table, and the optimistic-lock
//! guard used by the store before committing a status change.
//!
//! Everything here is pure; the store in `echoroom-db` owns the records and
//! calls [`check_transition`] while holding the per-idea lock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Version};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Archived,
}

impl IdeaStatus {
    /// Every status in lifecycle order.
    pub const ALL: [IdeaStatus; 6] = [
        IdeaStatus::Draft,
        IdeaStatus::Submitted,
        IdeaStatus::UnderReview,
        IdeaStatus::Approved,
        IdeaStatus::Rejected,
        IdeaStatus::Archived,
    ];

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Draft => "draft",
            IdeaStatus::Submitted => "submitted",
            IdeaStatus::UnderReview => "under_review",
            IdeaStatus::Approved => "approved",
            IdeaStatus::Rejected => "rejected",
            IdeaStatus::Archived => "archived",
        }
    }

    /// Archived ideas accept no further mutations of any kind.
    pub fn is_terminal(self) -> bool {
        self == IdeaStatus::Archived
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = IdeaStatus::ALL.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid idea status '{s}'. Must be one of: {names:?}"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from` may transition to.
///
/// Transition rules:
/// - `draft`        -> `submitted`
/// - `submitted`    -> `under_review`
/// - `under_review` -> `approved`, `rejected`
/// - `approved`     -> `archived`
/// - `rejected`     -> `archived`
/// - `archived`     -> (none)
pub fn valid_transitions(from: IdeaStatus) -> &'static [IdeaStatus] {
    match from {
        IdeaStatus::Draft => &[IdeaStatus::Submitted],
        IdeaStatus::Submitted => &[IdeaStatus::UnderReview],
        IdeaStatus::UnderReview => &[IdeaStatus::Approved, IdeaStatus::Rejected],
        IdeaStatus::Approved | IdeaStatus::Rejected => &[IdeaStatus::Archived],
        IdeaStatus::Archived => &[],
    }
}

/// Validate that a status transition from `current` to `next` is in the table.
pub fn validate_transition(current: IdeaStatus, next: IdeaStatus) -> Result<(), CoreError> {
    if valid_transitions(current).contains(&next) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: current,
            to: next,
        })
    }
}

/// Optimistic-lock check: the caller's version must equal the stored one.
pub fn check_version(id: &str, expected: Version, current: Version) -> Result<(), CoreError> {
    if expected == current {
        Ok(())
    } else {
        Err(CoreError::VersionConflict {
            id: id.to_string(),
            expected,
            current,
        })
    }
}

/// Full guard for a status change, run while the record is locked.
///
/// The version check runs first, so a stale caller always sees
/// `VersionConflict` even when its requested edge is also illegal.
pub fn check_transition(
    id: &str,
    current_status: IdeaStatus,
    current_version: Version,
    expected_version: Version,
    target: IdeaStatus,
) -> Result<(), CoreError> {
    check_version(id, expected_version, current_version)?;
    validate_transition(current_status, target)
}

/// Guard for field edits: version must match and the idea must not be archived.
pub fn check_editable(
    id: &str,
    current_status: IdeaStatus,
    current_version: Version,
    expected_version: Version,
) -> Result<(), CoreError> {
    check_version(id, expected_version, current_version)?;
    if current_status.is_terminal() {
        return Err(CoreError::Conflict(format!(
            "Idea {id} is archived and accepts no further changes"
        )));
    }
    Ok(())
}

/// A status change request as received from a caller. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub idea_id: EntityId,
    pub from_version: Version,
    pub target_status: IdeaStatus,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
