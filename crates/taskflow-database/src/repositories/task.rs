//! Task repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::task::{Task, TaskFilter};

use super::db_error;
use crate::traits::TaskStore;

const TASK_COLUMNS: &str = "id, workspace_id, project_id, title, description, status, priority, \
     assignee_id, created_by, due_date, version, created_at, updated_at";

/// Repository for tasks.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn create(&self, task: &Task) -> AppResult<()> {
        sqlx::query(&format!(
            "INSERT INTO tasks ({TASK_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
        ))
        .bind(task.id)
        .bind(task.workspace_id)
        .bind(task.project_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.priority)
        .bind(task.assignee_id)
        .bind(task.created_by)
        .bind(task.due_date)
        .bind(task.version)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create task"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find task"))
    }

    async fn find_by_workspace(
        &self,
        workspace_id: Uuid,
        filter: &TaskFilter,
    ) -> AppResult<Vec<Task>> {
        filtered_query(workspace_id, filter)
            .build_query_as::<Task>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list tasks"))
    }

    async fn update(&self, task: &Task) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE tasks SET title = $2, description = $3, status = $4, priority = $5, \
             assignee_id = $6, due_date = $7, version = $8, updated_at = $9 \
             WHERE id = $1",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.priority)
        .bind(task.assignee_id)
        .bind(task.due_date)
        .bind(task.version)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update task"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        // Comments cascade through the foreign key.
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete task"))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Workspace task listing with every present criterion pushed into `WHERE`.
fn filtered_query(workspace_id: Uuid, filter: &TaskFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM tasks WHERE workspace_id = "));
    builder.push_bind(workspace_id);

    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(priority) = filter.priority {
        builder.push(" AND priority = ").push_bind(priority);
    }
    if let Some(assignee_id) = filter.assignee_id {
        builder.push(" AND assignee_id = ").push_bind(assignee_id);
    }
    if let Some(term) = filter.search_term() {
        let pattern = format!("%{}%", escape_like(&term));
        builder
            .push(" AND (LOWER(title) LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR LOWER(description) LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }

    builder.push(" ORDER BY created_at DESC");
    builder
}

/// Treat `%`, `_` and `\` in a search term as literals.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
