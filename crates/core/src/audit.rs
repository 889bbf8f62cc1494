//! Audit action/reason templating and integrity-hash chaining.
//!
//! This module lives in `core` (zero internal deps) so both the store and
//! the engine layer can use it. Audit entries are append-only; the hash
//! chain makes after-the-fact edits detectable.

use sha2::{Digest, Sha256};

use crate::status::JobStatus;

// ---------------------------------------------------------------------------
// Action and reason templating
// ---------------------------------------------------------------------------

/// Action string recorded on the synthetic creation entry of an
/// auto-generated rework order.
pub const ACTION_REWORK_GENERATED: &str = "Rework Order Generated";

/// Action string for an ordinary status change.
pub fn status_change_action(new_status: JobStatus) -> String {
    format!("Status change to {}", new_status.audit_label())
}

/// Default reason recorded when the caller supplies no decision.
pub fn default_reason(new_status: JobStatus) -> String {
    format!("Status changed to {}", new_status.audit_label())
}

/// Reason recorded on the synthetic creation entry of a rework order.
pub fn rework_creation_reason(parent_id: &str, rework_reason: &str) -> String {
    format!(
        "Rework ticket created automatically. Linked to parent order: {parent_id}. \
         Reason: {rework_reason}"
    )
}

// ---------------------------------------------------------------------------
// Integrity hash chain
// ---------------------------------------------------------------------------

/// Known seed value for the first entry in the hash chain.
const CHAIN_SEED: &str = "ORIT_AUDIT_CHAIN_SEED_V1";

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Compute the integrity hash for an audit entry.
///
/// `prev_hash` is the hash of the previous entry, or `None` for the first
/// entry in the chain (which uses a known seed value). `entry_data` is a
/// canonical string representation of the entry's content.
pub fn compute_integrity_hash(prev_hash: Option<&str>, entry_data: &str) -> String {
    let prev = prev_hash.unwrap_or(CHAIN_SEED);
    sha256_hex(format!("{prev}|{entry_data}").as_bytes())
}
