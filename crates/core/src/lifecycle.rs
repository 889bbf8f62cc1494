//! Static declaration of the order workflow: legal transitions, role
//! ownership, and presentation labels per status.
//!
//! This table is the single source of truth for which status changes are
//! legal. The transition engine consults it before every mutation; nothing
//! else in the system may invent an edge. Lookups are pure and infallible:
//! an unknown status yields the empty successor set and the
//! [`StageOwner::Unassigned`] sentinel, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::JobStatus;

// ---------------------------------------------------------------------------
// Stage ownership
// ---------------------------------------------------------------------------

/// The party responsible for acting on a job while it sits in a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageOwner {
    /// The ORIT back-office system itself (automated intake/closure steps).
    Orit,
    /// Back-office operations staff.
    Operations,
    /// A field installation engineer.
    FieldAgent,
    /// Sentinel for statuses absent from the table. No live status maps to
    /// this; it exists so owner lookups never fail.
    Unassigned,
}

impl fmt::Display for StageOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageOwner::Orit => "ORIT",
            StageOwner::Operations => "Operations",
            StageOwner::FieldAgent => "Field Agent",
            StageOwner::Unassigned => "Unassigned",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Lifecycle table
// ---------------------------------------------------------------------------

/// One row of the lifecycle table.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleStage {
    pub status: JobStatus,
    /// Presentation label ("Order Received"). Display text comes from here,
    /// not from the status identifier.
    pub label: &'static str,
    pub owner: StageOwner,
    pub description: &'static str,
    /// Legal successor statuses. Empty for terminal stages.
    pub next: &'static [JobStatus],
    /// Human description of the input the transition out of this stage
    /// needs, if any.
    pub required_decision: Option<&'static str>,
}

/// The full workflow, one entry per status.
pub const JOB_LIFECYCLE: &[LifecycleStage] = &[
    LifecycleStage {
        status: JobStatus::OrderReceived,
        label: "Order Received",
        owner: StageOwner::Orit,
        description: "Order received from Business Unit",
        next: &[JobStatus::InventoryCheckPending],
        required_decision: Some("Initiate inventory check"),
    },
    LifecycleStage {
        status: JobStatus::InventoryCheckPending,
        label: "Inventory Check Pending",
        owner: StageOwner::Orit,
        description: "Initial inventory availability check in progress",
        next: &[JobStatus::SiteCheckPending, JobStatus::WaitingForProcurement],
        required_decision: Some("Inventory availability outcome"),
    },
    LifecycleStage {
        status: JobStatus::SiteCheckPending,
        label: "Site Check Pending",
        owner: StageOwner::Operations,
        description: "Awaiting site feasibility assessment",
        next: &[JobStatus::NodeCapacityPending, JobStatus::SiteCheckFailed],
        required_decision: Some("Site check outcome"),
    },
    LifecycleStage {
        status: JobStatus::SiteCheckFailed,
        label: "Site Check Failed",
        owner: StageOwner::Operations,
        description: "Site not serviceable or requires civil work",
        next: &[JobStatus::BackendNotified],
        required_decision: Some("Notify Business Unit"),
    },
    LifecycleStage {
        status: JobStatus::NodeCapacityPending,
        label: "Node Capacity Pending",
        owner: StageOwner::Operations,
        description: "Verifying exchange node port capacity",
        next: &[JobStatus::InventoryAllocationPending],
        required_decision: Some("Node capacity verification"),
    },
    LifecycleStage {
        status: JobStatus::InventoryAllocationPending,
        label: "Inventory Allocation Pending",
        owner: StageOwner::Orit,
        description: "Allocating local depot stock to the order",
        next: &[JobStatus::EngineerAssigned, JobStatus::InventoryMissing],
        required_decision: Some("Allocation outcome and agent assignment"),
    },
    LifecycleStage {
        status: JobStatus::InventoryMissing,
        label: "Inventory Missing",
        owner: StageOwner::Orit,
        description: "Required inventory not available",
        next: &[JobStatus::WaitingForProcurement],
        required_decision: Some("Initiate procurement"),
    },
    LifecycleStage {
        status: JobStatus::WaitingForProcurement,
        label: "Waiting for Procurement",
        owner: StageOwner::Orit,
        description: "Awaiting inventory procurement",
        next: &[JobStatus::SiteCheckPending],
        required_decision: Some("Inventory received confirmation"),
    },
    LifecycleStage {
        status: JobStatus::EngineerAssigned,
        label: "Engineer Assigned",
        owner: StageOwner::Operations,
        description: "Field agent assigned to job",
        next: &[JobStatus::JobInProgress],
        required_decision: Some("Agent starts job"),
    },
    LifecycleStage {
        status: JobStatus::JobInProgress,
        label: "Job In Progress",
        owner: StageOwner::FieldAgent,
        description: "Agent actively working on installation",
        next: &[
            JobStatus::JobCompleted,
            JobStatus::JobFailed,
            JobStatus::ReworkRequired,
        ],
        required_decision: Some("Job completion outcome"),
    },
    LifecycleStage {
        status: JobStatus::JobCompleted,
        label: "Job Completed",
        owner: StageOwner::FieldAgent,
        description: "Installation completed successfully",
        next: &[],
        required_decision: None,
    },
    LifecycleStage {
        status: JobStatus::JobFailed,
        label: "Job Failed",
        owner: StageOwner::FieldAgent,
        description: "Installation failed due to site issue",
        next: &[JobStatus::BackendNotified],
        required_decision: Some("Operations review"),
    },
    LifecycleStage {
        status: JobStatus::ReworkRequired,
        label: "Rework Required",
        owner: StageOwner::FieldAgent,
        description: "Issue encountered, requires rework",
        next: &[JobStatus::EngineerAssigned],
        required_decision: Some("Operations review and reassignment"),
    },
    LifecycleStage {
        status: JobStatus::ReworkInitiated,
        label: "Rework Initiated",
        owner: StageOwner::Orit,
        description: "Auto-generated rework ticket awaiting re-evaluation",
        next: &[JobStatus::InventoryCheckPending],
        required_decision: Some("Re-evaluate order"),
    },
    LifecycleStage {
        status: JobStatus::BackendNotified,
        label: "Backend Notified",
        owner: StageOwner::Orit,
        description: "Business Unit notified of issue",
        next: &[],
        required_decision: None,
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Find the table row for a status.
pub fn stage_of(status: JobStatus) -> Option<&'static LifecycleStage> {
    JOB_LIFECYCLE.iter().find(|s| s.status == status)
}

/// Legal successor statuses. Empty for terminal or unknown statuses.
pub fn successors_of(status: JobStatus) -> &'static [JobStatus] {
    stage_of(status).map(|s| s.next).unwrap_or(&[])
}

/// The role responsible for acting on a status.
pub fn owner_of(status: JobStatus) -> StageOwner {
    stage_of(status)
        .map(|s| s.owner)
        .unwrap_or(StageOwner::Unassigned)
}

/// Presentation label for a status, falling back to the audit label for a
/// status missing from the table.
pub fn label_of(status: JobStatus) -> &'static str {
    stage_of(status)
        .map(|s| s.label)
        .unwrap_or_else(|| status.audit_label())
}

/// Human description of the stage, empty when unknown.
pub fn description_of(status: JobStatus) -> &'static str {
    stage_of(status).map(|s| s.description).unwrap_or("")
}

/// What input the transition out of this stage needs, if any.
pub fn required_decision(status: JobStatus) -> Option<&'static str> {
    stage_of(status).and_then(|s| s.required_decision)
}

/// Whether `from -> to` is a declared edge of the workflow.
pub fn is_legal_transition(from: JobStatus, to: JobStatus) -> bool {
    successors_of(from).contains(&to)
}

/// Whether the status has no legal successors.
pub fn is_terminal(status: JobStatus) -> bool {
    successors_of(status).is_empty()
}
