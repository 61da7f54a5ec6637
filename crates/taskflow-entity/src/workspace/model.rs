//! Workspace entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A workspace: the tenant boundary all access control is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    /// Unique workspace identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// The user who created the workspace (its first OWNER).
    pub created_by: Uuid,
    /// When the workspace was created.
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    /// Builds a new workspace owned by `created_by`.
    pub fn new(name: impl Into<String>, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_by,
            created_at: Utc::now(),
        }
    }
}
