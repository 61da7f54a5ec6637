//! Project repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::project::Project;

use super::db_error;
use crate::traits::ProjectStore;

/// Repository for projects.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn create(&self, project: &Project) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO projects (id, workspace_id, name, description, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(project.id)
        .bind(project.workspace_id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create project"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT id, workspace_id, name, description, created_at FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find project"))
    }

    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT id, workspace_id, name, description, created_at FROM projects \
             WHERE workspace_id = $1 ORDER BY created_at ASC",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list projects"))
    }
}
