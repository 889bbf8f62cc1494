//! The transition engine: the only component permitted to mutate job state.
//!
//! Every call validates against the lifecycle table, then applies the
//! status change and all of its side effects (metadata merge, audit entry,
//! cross-role notices, rework spawn) under one lock acquisition. Readers
//! only ever see committed snapshots; bus events fire after the lock is
//! released, so a subscriber that re-reads on receipt always observes the
//! new state.
//!
//! Concurrency: callers serialize per job in the upstream UI, but the
//! engine does not rely on that — the single state mutex preserves the
//! "exactly one audit entry, at most one spawned child" guarantee under
//! concurrent calls from any runtime.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tokio::sync::broadcast;

use orit_core::audit::{
    default_reason, rework_creation_reason, status_change_action, ACTION_REWORK_GENERATED,
};
use orit_core::decision::{TransitionDecision, DECISION_TYPE_STATUS_TRANSITION};
use orit_core::error::EngineError;
use orit_core::lifecycle;
use orit_core::roles::{User, UserRole, SYSTEM_ACTOR};
use orit_core::status::JobStatus;
use orit_core::types::JobId;
use orit_events::{EngineEvent, EventBus};
use orit_store::models::audit::{AuditLog, NewAuditEntry, WorkflowDecision};
use orit_store::models::job::{Job, JobMetadata};
use orit_store::models::notification::Notification;
use orit_store::{AuditTrail, JobFilter, JobStore, NotificationStore};

use crate::{notifier, rework};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What a committed transition did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOutcome {
    pub job_id: JobId,
    pub previous_status: JobStatus,
    pub new_status: JobStatus,
    /// Id of the rework child spawned by this transition, if any. Spawn
    /// results are reported here, independent of the parent's own change.
    pub rework_ticket_id: Option<JobId>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Shared mutable state: one writer (the engine), any number of snapshot
/// readers.
struct EngineState {
    jobs: JobStore,
    audit: AuditTrail,
    notifications: NotificationStore,
}

/// The order lifecycle engine.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct LifecycleEngine {
    state: Mutex<EngineState>,
    bus: EventBus,
}

impl LifecycleEngine {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(EngineState {
                jobs: JobStore::new(),
                audit: AuditTrail::new(),
                notifications: NotificationStore::new(),
            }),
            bus: EventBus::default(),
        }
    }

    /// Acquire the state lock, surfacing poisoning as an internal error
    /// instead of panicking.
    fn state(&self) -> Result<MutexGuard<'_, EngineState>, EngineError> {
        self.state
            .lock()
            .map_err(|_| EngineError::Internal("engine state lock poisoned".to_string()))
    }

    // -----------------------------------------------------------------------
    // Bootstrap
    // -----------------------------------------------------------------------

    /// Install an initial book of jobs. Intended for the (out-of-scope)
    /// seeding layer; does not audit or publish.
    pub fn seed_jobs(&self, jobs: impl IntoIterator<Item = Job>) -> Result<(), EngineError> {
        let mut state = self.state()?;
        for job in jobs {
            state.jobs.upsert(job);
        }
        Ok(())
    }

    /// Register a single new job.
    pub fn add_job(&self, job: Job) -> Result<(), EngineError> {
        self.seed_jobs([job])
    }

    // -----------------------------------------------------------------------
    // Transition
    // -----------------------------------------------------------------------

    /// Apply a status change with all of its side effects.
    ///
    /// Fails with [`EngineError::JobNotFound`], [`EngineError::IllegalTransition`],
    /// or [`EngineError::IncompleteDecision`] before any mutation; on success
    /// exactly one audit entry is appended and at most one rework child is
    /// spawned.
    pub fn transition(
        &self,
        job_id: &str,
        new_status: JobStatus,
        actor: &User,
        metadata: Option<JobMetadata>,
        decision: Option<TransitionDecision>,
    ) -> Result<TransitionOutcome, EngineError> {
        let mut state = self.state()?;

        let current = state
            .jobs
            .get(job_id)
            .cloned()
            .ok_or_else(|| EngineError::JobNotFound(job_id.to_string()))?;
        let previous_status = current.status;

        if !lifecycle::is_legal_transition(previous_status, new_status) {
            tracing::warn!(
                job_id,
                from = %previous_status,
                to = %new_status,
                "Rejected illegal transition"
            );
            return Err(EngineError::IllegalTransition {
                from: previous_status,
                to: new_status,
            });
        }

        ensure_decision_complete(new_status, metadata.as_ref(), decision.as_ref())?;

        // Stage the updated job: status, caller metadata, freshness stamp.
        let mut updated = current;
        updated.status = new_status;
        if let Some(metadata) = &metadata {
            metadata.apply_to(&mut updated);
        }
        updated.last_updated = chrono::Utc::now();

        // Exactly one audit entry per transition.
        let actor_name = actor.audit_name();
        let reason = decision
            .as_ref()
            .map(|d| d.reason.clone())
            .unwrap_or_else(|| default_reason(new_status));
        let decision_echo = decision.as_ref().map(|d| WorkflowDecision {
            decision_type: DECISION_TYPE_STATUS_TRANSITION.to_string(),
            outcome: d
                .outcome
                .clone()
                .unwrap_or_else(|| new_status.as_str().to_string()),
            reason: d.reason.clone(),
            actor: actor_name.clone(),
            timestamp: chrono::Utc::now(),
        });
        state.audit.append(NewAuditEntry {
            job_id: updated.id.clone(),
            action: status_change_action(new_status),
            actor: actor_name,
            previous_status,
            new_status,
            reason,
            decision: decision_echo,
        });

        // Cross-role notices.
        for notice in notifier::route_transition(&updated, actor, new_status) {
            state.notifications.push(notice);
        }

        // At most one rework child per parent, guarded by the ticket flag.
        let mut rework_ticket_id = None;
        if new_status == JobStatus::ReworkRequired && !updated.has_rework_ticket {
            let child = self.spawn_rework_order(&mut state, &mut updated, actor);
            rework_ticket_id = Some(child);
        }

        state.jobs.upsert(updated);
        drop(state);

        tracing::info!(
            job_id,
            from = %previous_status,
            to = %new_status,
            actor = %actor.username,
            "Transition committed"
        );
        self.bus.publish(EngineEvent::JobTransitioned {
            job_id: job_id.to_string(),
            previous_status,
            new_status,
            actor_role: actor.role,
        });
        if let Some(child_id) = &rework_ticket_id {
            self.bus.publish(EngineEvent::ReworkSpawned {
                parent_id: job_id.to_string(),
                child_id: child_id.clone(),
            });
        }

        Ok(TransitionOutcome {
            job_id: job_id.to_string(),
            previous_status,
            new_status,
            rework_ticket_id,
        })
    }

    /// Create the rework child for `parent`, mark the parent as ticketed,
    /// and record the synthetic audit entry plus the two creation notices.
    /// Runs inside the caller's lock; returns the child id.
    fn spawn_rework_order(
        &self,
        state: &mut EngineState,
        parent: &mut Job,
        actor: &User,
    ) -> JobId {
        let sequence = state.jobs.children_of(&parent.id).len() + 1;
        let child = rework::build_rework_order(parent, actor, sequence);
        let reason = rework::rework_reason_of(parent);

        parent.has_rework_ticket = true;
        parent.rework_ticket_id = Some(child.id.clone());

        state.audit.append(NewAuditEntry {
            job_id: child.id.clone(),
            action: ACTION_REWORK_GENERATED.to_string(),
            actor: SYSTEM_ACTOR.to_string(),
            previous_status: JobStatus::ReworkRequired,
            new_status: JobStatus::ReworkInitiated,
            reason: rework_creation_reason(&parent.id, &reason),
            decision: None,
        });
        for notice in notifier::rework_notices(&parent.id, &child.id, &reason) {
            state.notifications.push(notice);
        }

        tracing::info!(
            parent_id = %parent.id,
            child_id = %child.id,
            reason = %reason,
            "Rework order generated"
        );

        let child_id = child.id.clone();
        state.jobs.upsert(child);
        child_id
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Snapshot of a single job.
    pub fn get_job(&self, job_id: &str) -> Result<Option<Job>, EngineError> {
        Ok(self.state()?.jobs.get(job_id).cloned())
    }

    /// Snapshot of all jobs matching the filter (all jobs when `None`),
    /// ordered by id.
    pub fn list_jobs(&self, filter: Option<&JobFilter>) -> Result<Vec<Job>, EngineError> {
        let state = self.state()?;
        Ok(match filter {
            Some(filter) => state.jobs.filter(filter),
            None => state.jobs.all(),
        })
    }

    /// Audit entries, newest first; scoped to one job when `job_id` is set.
    pub fn audit_log(&self, job_id: Option<&str>) -> Result<Vec<AuditLog>, EngineError> {
        let state = self.state()?;
        Ok(match job_id {
            Some(job_id) => state.audit.for_job(job_id),
            None => state.audit.entries(),
        })
    }

    /// Re-derive the audit hash chain. `false` means an entry was altered
    /// after the fact.
    pub fn verify_audit_chain(&self) -> Result<bool, EngineError> {
        Ok(self.state()?.audit.verify_chain())
    }

    /// Notices visible to a role (all notices when `None`), newest first.
    pub fn notifications(&self, role: Option<UserRole>) -> Result<Vec<Notification>, EngineError> {
        Ok(self.state()?.notifications.for_role(role))
    }

    /// Unread notices visible to a role.
    pub fn unread_notifications(&self, role: UserRole) -> Result<usize, EngineError> {
        Ok(self.state()?.notifications.unread_count(role))
    }

    /// Mark a notice read. Returns `true` when the notice existed and was
    /// previously unread; publishes [`EngineEvent::NotificationRead`] only
    /// in that case.
    pub fn mark_notification_read(&self, id: &str) -> Result<bool, EngineError> {
        let changed = self.state()?.notifications.mark_read(id);
        if changed {
            self.bus.publish(EngineEvent::NotificationRead {
                notification_id: id.to_string(),
            });
        }
        Ok(changed)
    }

    /// Subscribe to committed changes. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.bus.subscribe()
    }
}

impl Default for LifecycleEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Decision completeness
// ---------------------------------------------------------------------------

/// Transitions whose outcome is ambiguous (blockage report: rework vs.
/// outright failure) must identify the blockage, either through a
/// structured decision or a `blockage_type` in the metadata.
fn ensure_decision_complete(
    new_status: JobStatus,
    metadata: Option<&JobMetadata>,
    decision: Option<&TransitionDecision>,
) -> Result<(), EngineError> {
    let needs_category = matches!(
        new_status,
        JobStatus::ReworkRequired | JobStatus::JobFailed
    );
    if !needs_category {
        return Ok(());
    }

    let has_category = metadata.is_some_and(|m| m.blockage_type.is_some());
    if decision.is_some() || has_category {
        Ok(())
    } else {
        Err(EngineError::IncompleteDecision {
            status: new_status,
            missing: "blockage category (decision or blockageType metadata)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unambiguous_transitions_need_no_decision() {
        assert!(ensure_decision_complete(JobStatus::InventoryCheckPending, None, None).is_ok());
        assert!(ensure_decision_complete(JobStatus::JobCompleted, None, None).is_ok());
    }

    #[test]
    fn blockage_reports_require_a_category() {
        let err = ensure_decision_complete(JobStatus::ReworkRequired, None, None).unwrap_err();
        assert!(matches!(err, EngineError::IncompleteDecision { .. }));

        assert!(ensure_decision_complete(JobStatus::JobFailed, None, None).is_err());
    }

    #[test]
    fn metadata_blockage_type_satisfies_the_requirement() {
        let metadata = JobMetadata {
            blockage_type: Some("No Access".into()),
            ..Default::default()
        };
        assert!(ensure_decision_complete(JobStatus::ReworkRequired, Some(&metadata), None).is_ok());
    }

    #[test]
    fn decision_satisfies_the_requirement() {
        let decision = TransitionDecision::with_outcome(
            "Agent reported rework required: Blocked Duct",
            "rework_required",
        );
        assert!(ensure_decision_complete(JobStatus::JobFailed, None, Some(&decision)).is_ok());
    }
}
