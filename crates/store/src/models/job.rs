//! Job entity model and the partial-update DTO merged during transitions.
//!
//! Field names serialize in camelCase to match the dashboard's wire shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orit_core::roles::UserRole;
use orit_core::status::JobStatus;
use orit_core::types::{JobId, Timestamp};

// ---------------------------------------------------------------------------
// Descriptive enumerations
// ---------------------------------------------------------------------------

/// Service technology ordered by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "FTTP")]
    Fttp,
    #[serde(rename = "FTTC")]
    Fttc,
    Ethernet,
}

/// Service-level commitment attached to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlaTier {
    Standard,
    Premium,
}

/// How the fibre reaches the premises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FibreRoute {
    Underground,
    Overhead,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Fttp => "FTTP",
            ServiceType::Fttc => "FTTC",
            ServiceType::Ethernet => "Ethernet",
        }
    }
}

// ---------------------------------------------------------------------------
// Job entity
// ---------------------------------------------------------------------------

/// A fibre-installation order.
///
/// Field-capture fields stay unset until the relevant workflow stage is
/// reached; rework-linkage fields are mutually exclusive between a parent
/// (`has_rework_ticket`/`rework_ticket_id`) and its child
/// (`parent_order_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,

    // Descriptive
    pub customer_name: String,
    pub address: String,
    pub postcode: String,
    pub service_type: ServiceType,
    pub sla: SlaTier,
    pub region: String,
    pub scheduled_date: NaiveDate,

    // Workflow
    pub status: JobStatus,
    pub last_updated: Timestamp,
    pub assigned_agent_id: Option<String>,

    // Field capture
    pub notes: Option<String>,
    pub ont_serial_number: Option<String>,
    pub fibre_route: Option<FibreRoute>,
    pub photos: Option<Vec<String>>,
    pub drill_required: Option<bool>,
    pub customer_available: Option<bool>,
    pub blockage_type: Option<String>,

    // Rework linkage
    pub parent_order_id: Option<JobId>,
    pub rework_reason: Option<String>,
    pub created_from: Option<UserRole>,
    pub has_rework_ticket: bool,
    pub rework_ticket_id: Option<JobId>,
}

impl Job {
    /// A freshly received order: status ORDER_RECEIVED, nothing captured,
    /// no rework linkage.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<JobId>,
        customer_name: impl Into<String>,
        address: impl Into<String>,
        postcode: impl Into<String>,
        service_type: ServiceType,
        sla: SlaTier,
        region: impl Into<String>,
        scheduled_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            address: address.into(),
            postcode: postcode.into(),
            service_type,
            sla,
            region: region.into(),
            scheduled_date,
            status: JobStatus::OrderReceived,
            last_updated: chrono::Utc::now(),
            assigned_agent_id: None,
            notes: None,
            ont_serial_number: None,
            fibre_route: None,
            photos: None,
            drill_required: None,
            customer_available: None,
            blockage_type: None,
            parent_order_id: None,
            rework_reason: None,
            created_from: None,
            has_rework_ticket: false,
            rework_ticket_id: None,
        }
    }

    /// Whether this job is an auto-generated rework order.
    pub fn is_rework_order(&self) -> bool {
        self.parent_order_id.is_some()
    }
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

/// Field metadata a caller attaches to a transition.
///
/// Merge semantics: `Some` overwrites the job's field, `None` leaves it
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMetadata {
    pub assigned_agent_id: Option<String>,
    pub notes: Option<String>,
    pub ont_serial_number: Option<String>,
    pub fibre_route: Option<FibreRoute>,
    pub photos: Option<Vec<String>>,
    pub drill_required: Option<bool>,
    pub customer_available: Option<bool>,
    pub blockage_type: Option<String>,
}

impl JobMetadata {
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(v) = &self.assigned_agent_id {
            job.assigned_agent_id = Some(v.clone());
        }
        if let Some(v) = &self.notes {
            job.notes = Some(v.clone());
        }
        if let Some(v) = &self.ont_serial_number {
            job.ont_serial_number = Some(v.clone());
        }
        if let Some(v) = self.fibre_route {
            job.fibre_route = Some(v);
        }
        if let Some(v) = &self.photos {
            job.photos = Some(v.clone());
        }
        if let Some(v) = self.drill_required {
            job.drill_required = Some(v);
        }
        if let Some(v) = self.customer_available {
            job.customer_available = Some(v);
        }
        if let Some(v) = &self.blockage_type {
            job.blockage_type = Some(v.clone());
        }
    }
}
