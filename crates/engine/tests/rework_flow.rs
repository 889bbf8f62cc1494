//! Integration tests for automatic rework order generation.

mod common;

use common::{agent, engine_with, job_at, ops};
use orit_core::audit::ACTION_REWORK_GENERATED;
use orit_core::roles::UserRole;
use orit_core::status::JobStatus;
use orit_store::models::job::JobMetadata;
use orit_store::JobFilter;

fn blockage(blockage_type: &str) -> JobMetadata {
    JobMetadata {
        blockage_type: Some(blockage_type.into()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: a first rework report spawns exactly one linked child
// ---------------------------------------------------------------------------

#[test]
fn rework_report_spawns_linked_child() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);

    let outcome = engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent(),
            Some(blockage("No Access")),
            None,
        )
        .expect("legal transition");

    assert_eq!(outcome.rework_ticket_id.as_deref(), Some("RWK-ORD-1001-01"));

    let child = engine
        .get_job("RWK-ORD-1001-01")
        .unwrap()
        .expect("child exists");
    assert_eq!(child.status, JobStatus::ReworkInitiated);
    assert_eq!(child.parent_order_id.as_deref(), Some("ORD-1001"));
    assert_eq!(child.rework_reason.as_deref(), Some("No Access"));
    assert_eq!(child.created_from, Some(UserRole::FieldAgent));
    assert!(child.assigned_agent_id.is_none());
    assert!(child.ont_serial_number.is_none());

    let parent = engine.get_job("ORD-1001").unwrap().unwrap();
    assert!(parent.has_rework_ticket);
    assert_eq!(parent.rework_ticket_id.as_deref(), Some("RWK-ORD-1001-01"));
    assert_eq!(parent.blockage_type.as_deref(), Some("No Access"));
}

// ---------------------------------------------------------------------------
// Test: the spawn records a synthetic audit entry for the child
// ---------------------------------------------------------------------------

#[test]
fn spawn_records_synthetic_audit_entry() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);

    engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent(),
            Some(blockage("No Access")),
            None,
        )
        .unwrap();

    let child_log = engine.audit_log(Some("RWK-ORD-1001-01")).unwrap();
    assert_eq!(child_log.len(), 1);
    assert_eq!(child_log[0].action, ACTION_REWORK_GENERATED);
    assert_eq!(child_log[0].actor, "ORIT System");
    assert_eq!(child_log[0].previous_status, JobStatus::ReworkRequired);
    assert_eq!(child_log[0].new_status, JobStatus::ReworkInitiated);
    assert!(child_log[0]
        .reason
        .contains("Linked to parent order: ORD-1001"));
    assert!(child_log[0].reason.contains("Reason: No Access"));

    // Parent transition + synthetic creation entry.
    assert_eq!(engine.audit_log(None).unwrap().len(), 2);
    assert!(engine.verify_audit_chain().unwrap());
}

// ---------------------------------------------------------------------------
// Test: the spawn notifies both roles about the new ticket
// ---------------------------------------------------------------------------

#[test]
fn spawn_notifies_both_roles() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);

    engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent(),
            Some(blockage("No Access")),
            None,
        )
        .unwrap();

    // Blockage report + ticket-created for ops; ticket-created for the field.
    let ops_notices = engine.notifications(Some(UserRole::OritOps)).unwrap();
    let titles: Vec<_> = ops_notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["New Rework Ticket Generated", "Site Installation Blocked"]
    );

    let agent_notices = engine.notifications(Some(UserRole::FieldAgent)).unwrap();
    assert_eq!(agent_notices.len(), 1);
    assert_eq!(agent_notices[0].title, "Rework Ticket Created");
    assert_eq!(agent_notices[0].job_id, "RWK-ORD-1001-01");
}

// ---------------------------------------------------------------------------
// Test: a second rework report on a ticketed parent spawns nothing
// ---------------------------------------------------------------------------

#[test]
fn second_rework_report_is_idempotent_for_spawning() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);
    let agent = agent();
    let ops = ops();

    engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent,
            Some(blockage("No Access")),
            None,
        )
        .unwrap();

    // Operations reassigns, the agent restarts and reports rework again.
    engine
        .transition(
            "ORD-1001",
            JobStatus::EngineerAssigned,
            &ops,
            Some(JobMetadata {
                assigned_agent_id: Some("ENG_102".into()),
                ..Default::default()
            }),
            None,
        )
        .unwrap();
    engine
        .transition("ORD-1001", JobStatus::JobInProgress, &agent, None, None)
        .unwrap();
    let audit_before = engine.audit_log(None).unwrap().len();

    let outcome = engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent,
            Some(blockage("Blocked Duct")),
            None,
        )
        .expect("still a legal transition");

    // No second child, but exactly one more audit entry.
    assert!(outcome.rework_ticket_id.is_none());
    let children = engine
        .list_jobs(Some(&JobFilter {
            parent_order_id: Some("ORD-1001".into()),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(engine.audit_log(None).unwrap().len(), audit_before + 1);
}

// ---------------------------------------------------------------------------
// Test: rework chains under different parents number independently
// ---------------------------------------------------------------------------

#[test]
fn rework_counters_are_per_parent() {
    let engine = engine_with(vec![
        job_at("ORD-1001", JobStatus::JobInProgress),
        job_at("ORD-2002", JobStatus::JobInProgress),
    ]);
    let agent = agent();

    let first = engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent,
            Some(blockage("No Access")),
            None,
        )
        .unwrap();
    let second = engine
        .transition(
            "ORD-2002",
            JobStatus::ReworkRequired,
            &agent,
            Some(blockage("Wayleave Missing")),
            None,
        )
        .unwrap();

    assert_eq!(first.rework_ticket_id.as_deref(), Some("RWK-ORD-1001-01"));
    assert_eq!(second.rework_ticket_id.as_deref(), Some("RWK-ORD-2002-01"));
}

// ---------------------------------------------------------------------------
// Test: a spawned child can be driven through the workflow again
// ---------------------------------------------------------------------------

#[test]
fn spawned_child_reenters_the_workflow() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);

    engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &agent(),
            Some(blockage("No Access")),
            None,
        )
        .unwrap();

    engine
        .transition(
            "RWK-ORD-1001-01",
            JobStatus::InventoryCheckPending,
            &ops(),
            None,
            None,
        )
        .expect("child re-enters at inventory check");

    assert_eq!(
        engine.get_job("RWK-ORD-1001-01").unwrap().unwrap().status,
        JobStatus::InventoryCheckPending
    );
}

// ---------------------------------------------------------------------------
// Test: an operations-driven rework report is attributed to operations
// ---------------------------------------------------------------------------

#[test]
fn created_from_follows_the_originating_role() {
    let engine = engine_with(vec![job_at("ORD-1001", JobStatus::JobInProgress)]);

    engine
        .transition(
            "ORD-1001",
            JobStatus::ReworkRequired,
            &ops(),
            Some(blockage("Civil Work Required")),
            None,
        )
        .unwrap();

    let child = engine.get_job("RWK-ORD-1001-01").unwrap().unwrap();
    assert_eq!(child.created_from, Some(UserRole::OritOps));
}
