//! Rework order construction.
//!
//! When field work reports a blocking issue, a follow-up order is cloned
//! from the parent and re-queued at the start of the workflow. Child
//! construction is pure; the engine commits the child, the parent's ticket
//! flags, the synthetic audit entry, and the notices in the same locked
//! step, so a half-spawned child can never be observed.

use orit_core::roles::User;
use orit_core::status::JobStatus;
use orit_store::models::job::Job;

/// Fallback rework reason when the blockage category was not captured.
pub(crate) const DEFAULT_REWORK_REASON: &str = "Rework Required";

/// Deterministic child id: parent id plus a two-digit per-parent sequence
/// number (`RWK-ORD-1001-01`).
pub(crate) fn child_id(parent_id: &str, sequence: usize) -> String {
    format!("RWK-{parent_id}-{sequence:02}")
}

/// The reason recorded on the child and in the creation notices: the
/// parent's captured blockage category, if any.
pub(crate) fn rework_reason_of(parent: &Job) -> String {
    parent
        .blockage_type
        .clone()
        .unwrap_or_else(|| DEFAULT_REWORK_REASON.to_string())
}

/// Clone a parent order into its rework child.
///
/// Descriptive fields carry over; assignment and installation evidence
/// (agent, ONT serial, fibre route, photos) reset so the child re-enters
/// the workflow clean. The child starts at REWORK_INITIATED and records
/// which role class triggered it.
pub(crate) fn build_rework_order(parent: &Job, actor: &User, sequence: usize) -> Job {
    let mut child = parent.clone();
    child.id = child_id(&parent.id, sequence);
    child.status = JobStatus::ReworkInitiated;
    child.last_updated = chrono::Utc::now();

    child.parent_order_id = Some(parent.id.clone());
    child.rework_reason = Some(rework_reason_of(parent));
    child.created_from = Some(actor.role);

    child.assigned_agent_id = None;
    child.ont_serial_number = None;
    child.fibre_route = None;
    child.photos = None;

    child.has_rework_ticket = false;
    child.rework_ticket_id = None;

    child
}
