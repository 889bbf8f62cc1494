//! The order lifecycle engine: the sole mutator of job state.
//!
//! [`LifecycleEngine`] validates every requested status change against the
//! lifecycle table, applies it together with its side effects (audit entry,
//! cross-role notifications, rework spawning) in one synchronous step, and
//! publishes a bus event once the change is visible.
//!
//! The UI layers (operations dashboard, field-agent app) are callers only;
//! they read snapshots, issue transitions, and re-render on bus events.

pub mod engine;

mod notifier;
mod rework;

pub use engine::{LifecycleEngine, TransitionOutcome};
