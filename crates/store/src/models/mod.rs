//! Entity models and partial-update DTOs.

pub mod audit;
pub mod job;
pub mod notification;

pub use audit::{AuditLog, NewAuditEntry, WorkflowDecision};
pub use job::{FibreRoute, Job, JobMetadata, ServiceType, SlaTier};
pub use notification::Notification;
