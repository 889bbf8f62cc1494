//! Transition-to-notification routing rules (bidirectional sync).
//!
//! Pure functions from a committed change to the notices it produces; all
//! cross-role notification text lives here. The engine stores whatever
//! comes back, so routing stays decoupled from storage.
//!
//! Rules:
//! - Operations -> Field Agent: assignment of an engineer.
//! - Field Agent -> Operations: commencement, completion, and blockage
//!   reports (rework required / job failed).
//! - Everything else (internal procurement/inventory steps) produces no
//!   notice, only an audit entry.

use orit_core::roles::{User, UserRole};
use orit_core::status::JobStatus;
use orit_store::models::job::Job;
use orit_store::models::notification::Notification;

/// Notices produced by a committed transition. Zero or one in the current
/// rule set; returned as a `Vec` so the engine stores them uniformly.
pub(crate) fn route_transition(job: &Job, actor: &User, new_status: JobStatus) -> Vec<Notification> {
    let mut notices = Vec::new();

    // Operations -> Field Agent: engineer assignment.
    if actor.role == UserRole::OritOps && new_status == JobStatus::EngineerAssigned {
        notices.push(Notification::new(
            "New Job Assigned",
            format!(
                "A new {} order ({}) has been assigned to you by ORIT.",
                job.service_type.as_str(),
                job.id
            ),
            job.id.clone(),
            Some(UserRole::FieldAgent),
        ));
    }

    // Field Agent -> Operations: progress, completion, blockage.
    if actor.role == UserRole::FieldAgent {
        let titled = match new_status {
            JobStatus::JobInProgress => Some((
                "Job Commenced",
                format!(
                    "Agent {} has arrived at site and started {}.",
                    actor.username, job.id
                ),
            )),
            JobStatus::JobCompleted => Some((
                "Job Completed in Field",
                format!(
                    "Agent {} has finished installation for {}. Awaiting system activation.",
                    actor.username, job.id
                ),
            )),
            JobStatus::ReworkRequired | JobStatus::JobFailed => Some((
                "Site Installation Blocked",
                format!(
                    "Field Alert: Agent {} reported a blockage for {}. Status: {}.",
                    actor.username, job.id, new_status
                ),
            )),
            _ => None,
        };

        if let Some((title, message)) = titled {
            notices.push(Notification::new(
                title,
                message,
                job.id.clone(),
                Some(UserRole::OritOps),
            ));
        }
    }

    notices
}

/// The two notices emitted when a rework order is auto-generated: one to
/// Operations (new ticket) and one to the field-agent role (pending
/// reassignment). Both reference the child order.
pub(crate) fn rework_notices(
    parent_id: &str,
    child_id: &str,
    rework_reason: &str,
) -> Vec<Notification> {
    vec![
        Notification::new(
            "New Rework Ticket Generated",
            format!("Rework order {child_id} created for {parent_id}. Reason: {rework_reason}"),
            child_id.to_string(),
            Some(UserRole::OritOps),
        ),
        Notification::new(
            "Rework Ticket Created",
            format!("Rework ticket {child_id} created and pending reassignment"),
            child_id.to_string(),
            Some(UserRole::FieldAgent),
        ),
    ]
}
