//! The closed set of workflow statuses an installation order moves through.
//!
//! Wire names match the upstream dashboard's SCREAMING_SNAKE_CASE values
//! (`"ORDER_RECEIVED"`, ...). Display text never comes from string munging
//! at render time: presentation labels live in the lifecycle table and the
//! audit rendering is the closed lookup in [`JobStatus::audit_label`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    OrderReceived,
    InventoryCheckPending,
    SiteCheckPending,
    SiteCheckFailed,
    NodeCapacityPending,
    InventoryAllocationPending,
    InventoryMissing,
    WaitingForProcurement,
    EngineerAssigned,
    JobInProgress,
    JobCompleted,
    JobFailed,
    ReworkRequired,
    ReworkInitiated,
    BackendNotified,
}

/// Every status, in workflow order. Used by table-completeness checks and
/// by UI layers that enumerate filter options.
pub const ALL_STATUSES: &[JobStatus] = &[
    JobStatus::OrderReceived,
    JobStatus::InventoryCheckPending,
    JobStatus::SiteCheckPending,
    JobStatus::SiteCheckFailed,
    JobStatus::NodeCapacityPending,
    JobStatus::InventoryAllocationPending,
    JobStatus::InventoryMissing,
    JobStatus::WaitingForProcurement,
    JobStatus::EngineerAssigned,
    JobStatus::JobInProgress,
    JobStatus::JobCompleted,
    JobStatus::JobFailed,
    JobStatus::ReworkRequired,
    JobStatus::ReworkInitiated,
    JobStatus::BackendNotified,
];

impl JobStatus {
    /// The wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::OrderReceived => "ORDER_RECEIVED",
            JobStatus::InventoryCheckPending => "INVENTORY_CHECK_PENDING",
            JobStatus::SiteCheckPending => "SITE_CHECK_PENDING",
            JobStatus::SiteCheckFailed => "SITE_CHECK_FAILED",
            JobStatus::NodeCapacityPending => "NODE_CAPACITY_PENDING",
            JobStatus::InventoryAllocationPending => "INVENTORY_ALLOCATION_PENDING",
            JobStatus::InventoryMissing => "INVENTORY_MISSING",
            JobStatus::WaitingForProcurement => "WAITING_FOR_PROCUREMENT",
            JobStatus::EngineerAssigned => "ENGINEER_ASSIGNED",
            JobStatus::JobInProgress => "JOB_IN_PROGRESS",
            JobStatus::JobCompleted => "JOB_COMPLETED",
            JobStatus::JobFailed => "JOB_FAILED",
            JobStatus::ReworkRequired => "REWORK_REQUIRED",
            JobStatus::ReworkInitiated => "REWORK_INITIATED",
            JobStatus::BackendNotified => "BACKEND_NOTIFIED",
        }
    }

    /// The uppercase spaced form used in audit action and reason templates
    /// ("Status changed to INVENTORY CHECK PENDING").
    pub fn audit_label(self) -> &'static str {
        match self {
            JobStatus::OrderReceived => "ORDER RECEIVED",
            JobStatus::InventoryCheckPending => "INVENTORY CHECK PENDING",
            JobStatus::SiteCheckPending => "SITE CHECK PENDING",
            JobStatus::SiteCheckFailed => "SITE CHECK FAILED",
            JobStatus::NodeCapacityPending => "NODE CAPACITY PENDING",
            JobStatus::InventoryAllocationPending => "INVENTORY ALLOCATION PENDING",
            JobStatus::InventoryMissing => "INVENTORY MISSING",
            JobStatus::WaitingForProcurement => "WAITING FOR PROCUREMENT",
            JobStatus::EngineerAssigned => "ENGINEER ASSIGNED",
            JobStatus::JobInProgress => "JOB IN PROGRESS",
            JobStatus::JobCompleted => "JOB COMPLETED",
            JobStatus::JobFailed => "JOB FAILED",
            JobStatus::ReworkRequired => "REWORK REQUIRED",
            JobStatus::ReworkInitiated => "REWORK INITIATED",
            JobStatus::BackendNotified => "BACKEND NOTIFIED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
