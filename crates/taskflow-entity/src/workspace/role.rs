//! Workspace role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold inside a workspace.
///
/// Roles are opaque tags. There is deliberately no privilege level or
/// ordering: every permission check matches the role against an explicit
/// allow-set for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "workspace_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkspaceRole {
    /// Created the workspace or was granted ownership.
    Owner,
    /// Manages projects, tasks, and invites.
    Admin,
    /// Creates tasks and comments; edits only own or assigned tasks.
    Member,
    /// Read-only access.
    Viewer,
}

impl WorkspaceRole {
    /// All roles, in declaration order.
    pub const ALL: [WorkspaceRole; 4] = [Self::Owner, Self::Admin, Self::Member, Self::Viewer];

    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
            Self::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkspaceRole {
    type Err = taskflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "ADMIN" => Ok(Self::Admin),
            "MEMBER" => Ok(Self::Member),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(taskflow_core::AppError::validation(format!(
                "Invalid workspace role: '{s}'. Expected one of: OWNER, ADMIN, MEMBER, VIEWER"
            ))),
        }
    }
}
