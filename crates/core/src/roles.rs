//! Acting parties and their audit-facing identity rendering.
//!
//! Users are supplied by the (out-of-scope) session layer on every call;
//! the engine never stores them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed identity label under which all Operations-driven changes are
/// recorded. Field-driven changes carry the agent's username instead, so
/// human-facing audit text disambiguates system-driven from field-driven
/// activity.
pub const SYSTEM_ACTOR: &str = "ORIT System";

/// The two roles that drive transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    OritOps,
    FieldAgent,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::OritOps => "ORIT_OPS",
            UserRole::FieldAgent => "FIELD_AGENT",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated actor, as handed over by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    pub region: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        role: UserRole,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
            region: region.into(),
        }
    }

    /// The identity string recorded in audit entries and notifications.
    ///
    /// Operations actors are folded into the fixed [`SYSTEM_ACTOR`] label;
    /// field agents are named individually.
    pub fn audit_name(&self) -> String {
        match self.role {
            UserRole::OritOps => SYSTEM_ACTOR.to_string(),
            UserRole::FieldAgent => format!("{} (Field Agent)", self.username),
        }
    }
}
