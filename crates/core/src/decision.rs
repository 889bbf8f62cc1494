//! Structured decision vocabulary for workflow transitions.
//!
//! Several stages fan out to more than one successor status, and more than
//! one outcome can land on the same status (a site can be "not serviceable"
//! or "require civil work" — both end in SITE_CHECK_FAILED). Callers attach
//! a [`TransitionDecision`] so the audit trail records *why* a transition
//! happened, not just the resulting status.

use serde::{Deserialize, Serialize};

/// Decision type recorded on every caller-supplied decision echo.
pub const DECISION_TYPE_STATUS_TRANSITION: &str = "status_transition";

// ---------------------------------------------------------------------------
// Outcome vocabularies, per deciding stage
// ---------------------------------------------------------------------------

/// Site check outcomes (SITE_CHECK_PENDING).
pub const OUTCOME_SERVICEABLE: &str = "serviceable";
pub const OUTCOME_NOT_SERVICEABLE: &str = "not_serviceable";
pub const OUTCOME_CIVIL_WORK_REQUIRED: &str = "civil_work_required";

pub const SITE_CHECK_OUTCOMES: &[&str] = &[
    OUTCOME_SERVICEABLE,
    OUTCOME_NOT_SERVICEABLE,
    OUTCOME_CIVIL_WORK_REQUIRED,
];

/// Inventory outcomes (INVENTORY_CHECK_PENDING, INVENTORY_ALLOCATION_PENDING).
pub const OUTCOME_FULLY_AVAILABLE: &str = "fully_available";
pub const OUTCOME_PARTIALLY_AVAILABLE: &str = "partially_available";
pub const OUTCOME_NOT_AVAILABLE: &str = "not_available";

pub const INVENTORY_OUTCOMES: &[&str] = &[
    OUTCOME_FULLY_AVAILABLE,
    OUTCOME_PARTIALLY_AVAILABLE,
    OUTCOME_NOT_AVAILABLE,
];

/// Field completion outcomes (JOB_IN_PROGRESS).
pub const OUTCOME_COMPLETED_SUCCESSFULLY: &str = "completed_successfully";
pub const OUTCOME_ISSUE_ENCOUNTERED: &str = "issue_encountered";
pub const OUTCOME_REWORK_REQUIRED: &str = "rework_required";

pub const COMPLETION_OUTCOMES: &[&str] = &[
    OUTCOME_COMPLETED_SUCCESSFULLY,
    OUTCOME_ISSUE_ENCOUNTERED,
    OUTCOME_REWORK_REQUIRED,
];

/// Validate that an outcome string belongs to the given stage vocabulary.
pub fn validate_outcome(outcome: &str, vocabulary: &[&str]) -> Result<(), String> {
    if vocabulary.contains(&outcome) {
        Ok(())
    } else {
        Err(format!(
            "Invalid outcome '{outcome}'. Must be one of: {}",
            vocabulary.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Caller-supplied decision
// ---------------------------------------------------------------------------

/// The decision a caller attaches to a transition.
///
/// `reason` replaces the templated audit reason; `outcome` is the machine
/// token from one of the vocabularies above and defaults to the new
/// status's wire name when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDecision {
    pub reason: String,
    pub outcome: Option<String>,
}

impl TransitionDecision {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            outcome: None,
        }
    }

    pub fn with_outcome(reason: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            outcome: Some(outcome.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_outcomes_are_accepted() {
        assert!(validate_outcome(OUTCOME_SERVICEABLE, SITE_CHECK_OUTCOMES).is_ok());
        assert!(validate_outcome(OUTCOME_NOT_AVAILABLE, INVENTORY_OUTCOMES).is_ok());
        assert!(validate_outcome(OUTCOME_REWORK_REQUIRED, COMPLETION_OUTCOMES).is_ok());
    }

    #[test]
    fn outcome_from_wrong_stage_is_rejected() {
        let err = validate_outcome(OUTCOME_SERVICEABLE, COMPLETION_OUTCOMES).unwrap_err();
        assert!(err.contains("Invalid outcome 'serviceable'"));
    }

    #[test]
    fn empty_outcome_is_rejected() {
        assert!(validate_outcome("", SITE_CHECK_OUTCOMES).is_err());
    }

    #[test]
    fn decision_without_outcome() {
        let d = TransitionDecision::new("Procurement completed");
        assert_eq!(d.reason, "Procurement completed");
        assert_eq!(d.outcome, None);
    }
}
