//! Engine error taxonomy.
//!
//! All variants are local validation failures recovered at the call
//! boundary; none are fatal to the process. A failed call leaves the job
//! store, audit trail, and notification list untouched.

use crate::status::JobStatus;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The referenced job id does not exist.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// The requested status is not a declared successor of the job's
    /// current status. The UI guards against this, but the engine rejects
    /// it defensively rather than corrupt state.
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition { from: JobStatus, to: JobStatus },

    /// The transition's outcome is ambiguous and the caller supplied
    /// neither a decision nor the field metadata that identifies it.
    #[error("Incomplete decision for transition to {status}: {missing}")]
    IncompleteDecision {
        status: JobStatus,
        missing: &'static str,
    },

    /// Shared-state access failed (lock poisoning). Not expected in normal
    /// operation.
    #[error("Internal error: {0}")]
    Internal(String),
}
