//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project grouping tasks inside a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Owning workspace.
    pub workspace_id: Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl CreateProject {
    /// Materializes the row that will be inserted.
    pub fn into_project(self) -> Project {
        Project {
            id: Uuid::new_v4(),
            workspace_id: self.workspace_id,
            name: self.name,
            description: self.description,
            created_at: Utc::now(),
        }
    }
}
