//! Organization lifecycle status
//!
//! Organizations are never physically removed by the server. Deletion marks
//! the record `D`, and a deleted organization cannot be brought back to
//! `A` or `I`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an organization.
///
/// Serialized as the single-letter codes used on the wire.
///
/// # Transitions
///
/// ```text
/// Active <──> Inactive
///    │            │
///    └──> Deleted <┘   (terminal)
/// ```
///
/// # Examples
///
/// ```
/// use console_org::OrgStatus;
///
/// assert!(OrgStatus::Active.can_transition_to(OrgStatus::Inactive));
/// assert!(OrgStatus::Inactive.can_transition_to(OrgStatus::Deleted));
/// assert!(!OrgStatus::Deleted.can_transition_to(OrgStatus::Active));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrgStatus {
    /// Active organization
    #[default]
    #[serde(rename = "A")]
    Active,

    /// Inactive (suspended) organization
    #[serde(rename = "I")]
    Inactive,

    /// Logically deleted organization
    #[serde(rename = "D")]
    Deleted,
}

impl OrgStatus {
    /// Single-letter wire code.
    pub fn code(&self) -> char {
        match self {
            OrgStatus::Active => 'A',
            OrgStatus::Inactive => 'I',
            OrgStatus::Deleted => 'D',
        }
    }

    /// Parse a single-letter wire code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(OrgStatus::Active),
            'I' => Some(OrgStatus::Inactive),
            'D' => Some(OrgStatus::Deleted),
            _ => None,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            OrgStatus::Active => "Active",
            OrgStatus::Inactive => "Inactive",
            OrgStatus::Deleted => "Deleted",
        }
    }

    /// Check if this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrgStatus::Deleted)
    }

    /// Check whether moving from this status to `next` is allowed.
    ///
    /// Staying on the same status is always allowed.
    pub fn can_transition_to(&self, next: OrgStatus) -> bool {
        *self == next || !self.is_terminal()
    }

    /// Validate a transition, returning the target status on success.
    pub fn transition_to(&self, next: OrgStatus) -> Result<OrgStatus, StatusTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StatusTransitionError {
                from: *self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for OrgStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Attempted to move an organization out of a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot change organization status from {from} to {to}")]
pub struct StatusTransitionError {
    /// Current status.
    pub from: OrgStatus,
    /// Requested status.
    pub to: OrgStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in [OrgStatus::Active, OrgStatus::Inactive, OrgStatus::Deleted] {
            assert_eq!(OrgStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrgStatus::from_code('X'), None);
    }

    #[test]
    fn test_status_serde_uses_letters() {
        assert_eq!(serde_json::to_string(&OrgStatus::Inactive).unwrap(), "\"I\"");
        let status: OrgStatus = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(status, OrgStatus::Deleted);
    }

    #[test]
    fn test_active_and_inactive_toggle() {
        assert!(OrgStatus::Active.can_transition_to(OrgStatus::Inactive));
        assert!(OrgStatus::Inactive.can_transition_to(OrgStatus::Active));
        assert!(OrgStatus::Active.can_transition_to(OrgStatus::Active));
    }

    #[test]
    fn test_deleted_is_terminal() {
        assert!(OrgStatus::Deleted.can_transition_to(OrgStatus::Deleted));

        let err = OrgStatus::Deleted
            .transition_to(OrgStatus::Active)
            .unwrap_err();
        assert_eq!(err.from, OrgStatus::Deleted);
        assert_eq!(err.to, OrgStatus::Active);
        assert_eq!(
            err.to_string(),
            "Cannot change organization status from Deleted to Active"
        );
    }
}
