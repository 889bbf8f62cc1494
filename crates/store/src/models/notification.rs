//! Notification entity model.

use serde::{Deserialize, Serialize};

use orit_core::roles::UserRole;
use orit_core::types::{JobId, Timestamp};

/// A role-targeted notice derived from a transition.
///
/// Immutable once created except for `is_read`, which is flipped by an
/// explicit read action and nothing else. Notices are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub job_id: JobId,
    pub timestamp: Timestamp,
    pub is_read: bool,
    /// `None` means visible to all roles.
    pub target_role: Option<UserRole>,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        job_id: impl Into<JobId>,
        target_role: Option<UserRole>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            job_id: job_id.into(),
            timestamp: chrono::Utc::now(),
            is_read: false,
            target_role,
        }
    }
}
