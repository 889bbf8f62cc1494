//! Audit trail entity models.
//!
//! Audit entries are immutable records: there is no update DTO and no
//! mutable field. The trail assigns ids, timestamps, and integrity hashes
//! at append time.

use serde::{Deserialize, Serialize};

use orit_core::status::JobStatus;
use orit_core::types::{JobId, Timestamp};

// ---------------------------------------------------------------------------
// Decision echo
// ---------------------------------------------------------------------------

/// Structured echo of the caller's declared decision, rendered into the
/// audit entry so the UI can show *why* a transition occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDecision {
    #[serde(rename = "type")]
    pub decision_type: String,
    pub outcome: String,
    pub reason: String,
    pub actor: String,
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Audit log entity
// ---------------------------------------------------------------------------

/// A single audit entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub job_id: JobId,
    pub action: String,
    pub actor: String,
    pub timestamp: Timestamp,
    pub previous_status: JobStatus,
    pub new_status: JobStatus,
    pub reason: String,
    pub decision: Option<WorkflowDecision>,
    /// SHA-256 chain hash over this entry and its predecessor's hash.
    pub integrity_hash: String,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// What the engine hands to [`AuditTrail::append`]; id, timestamp, and
/// integrity hash are filled in by the trail.
///
/// [`AuditTrail::append`]: crate::audit_trail::AuditTrail::append
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub job_id: JobId,
    pub action: String,
    pub actor: String,
    pub previous_status: JobStatus,
    pub new_status: JobStatus,
    pub reason: String,
    pub decision: Option<WorkflowDecision>,
}
