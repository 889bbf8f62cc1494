//! Append-only, hash-chained audit trail.
//!
//! Entries are immutable once appended; the trail assigns each entry its
//! id, timestamp, and integrity hash. Appending is infallible in memory,
//! which upholds the all-or-nothing contract: the engine stages the entry
//! in the same locked step as the job mutation, so no committed transition
//! can lack its entry.

use orit_core::audit::compute_integrity_hash;
use orit_core::types::Timestamp;

use crate::models::audit::{AuditLog, NewAuditEntry};

/// Append-only audit log. Listing order is reverse-chronological
/// (newest first) — a documented contract, not an insertion accident.
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Vec<AuditLog>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, chaining its integrity hash onto the previous
    /// entry's. Returns the stored record.
    pub fn append(&mut self, entry: NewAuditEntry) -> AuditLog {
        let timestamp = chrono::Utc::now();
        let prev_hash = self.entries.last().map(|e| e.integrity_hash.as_str());
        let data = canonical_entry_data(&entry, timestamp);
        let integrity_hash = compute_integrity_hash(prev_hash, &data);

        let record = AuditLog {
            id: uuid::Uuid::new_v4().to_string(),
            job_id: entry.job_id,
            action: entry.action,
            actor: entry.actor,
            timestamp,
            previous_status: entry.previous_status,
            new_status: entry.new_status,
            reason: entry.reason,
            decision: entry.decision,
            integrity_hash,
        };
        self.entries.push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<AuditLog> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Entries for one job, newest first.
    pub fn for_job(&self, job_id: &str) -> Vec<AuditLog> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.job_id == job_id)
            .cloned()
            .collect()
    }

    /// Re-derive the hash chain and compare against the stored hashes.
    /// Returns `false` if any entry was altered after the fact.
    pub fn verify_chain(&self) -> bool {
        let mut prev_hash: Option<&str> = None;
        for entry in &self.entries {
            let data = canonical_entry_data(
                &NewAuditEntry {
                    job_id: entry.job_id.clone(),
                    action: entry.action.clone(),
                    actor: entry.actor.clone(),
                    previous_status: entry.previous_status,
                    new_status: entry.new_status,
                    reason: entry.reason.clone(),
                    decision: entry.decision.clone(),
                },
                entry.timestamp,
            );
            if compute_integrity_hash(prev_hash, &data) != entry.integrity_hash {
                return false;
            }
            prev_hash = Some(entry.integrity_hash.as_str());
        }
        true
    }
}

/// Canonical string representation of an entry's hashed content.
///
/// The decision echo is deliberately excluded: it duplicates `reason` and
/// `actor`, and keeping the canonical form flat makes re-derivation during
/// verification unambiguous.
fn canonical_entry_data(entry: &NewAuditEntry, timestamp: Timestamp) -> String {
    serde_json::json!({
        "jobId": entry.job_id,
        "action": entry.action,
        "actor": entry.actor,
        "timestamp": timestamp.to_rfc3339(),
        "previousStatus": entry.previous_status,
        "newStatus": entry.new_status,
        "reason": entry.reason,
    })
    .to_string()
}
