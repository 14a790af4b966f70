//! Repository for the `tasks` table.

use sqlx::PgPool;
use tracker_core::status::{TaskPriority, TaskStatus};
use tracker_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, sprint_id, assignee_id, title, description, status, \
                       priority, created_at, updated_at, completed_at, due_date";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Missing `status` / `priority` default to To Do / Medium.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, sprint_id, assignee_id, title, description,
                                status, priority, completed_at, due_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, $7), COALESCE($8, $9), $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project)
            .bind(input.sprint)
            .bind(input.assignee)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(TaskStatus::default().id())
            .bind(input.priority)
            .bind(TaskPriority::default().id())
            .bind(input.completed_at)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable column of a task. Omitted optional fields
    /// are reset (nullable columns to NULL, enums to their defaults).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = $2,
                sprint_id = $3,
                assignee_id = $4,
                title = $5,
                description = $6,
                status = COALESCE($7, $8),
                priority = COALESCE($9, $10),
                completed_at = $11,
                due_date = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project)
            .bind(input.sprint)
            .bind(input.assignee)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(TaskStatus::default().id())
            .bind(input.priority)
            .bind(TaskPriority::default().id())
            .bind(input.completed_at)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a task.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Nullable columns
    /// use a "provided" flag so that an explicit `null` clears the value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id   = COALESCE($2, project_id),
                sprint_id    = CASE WHEN $3 THEN $4 ELSE sprint_id END,
                assignee_id  = CASE WHEN $5 THEN $6 ELSE assignee_id END,
                title        = COALESCE($7, title),
                description  = COALESCE($8, description),
                status       = COALESCE($9, status),
                priority     = COALESCE($10, priority),
                completed_at = CASE WHEN $11 THEN $12 ELSE completed_at END,
                due_date     = CASE WHEN $13 THEN $14 ELSE due_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project)
            .bind(input.sprint.is_some())
            .bind(input.sprint.flatten())
            .bind(input.assignee.is_some())
            .bind(input.assignee.flatten())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(input.completed_at.is_some())
            .bind(input.completed_at.flatten())
            .bind(input.due_date.is_some())
            .bind(input.due_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Set the assignee of a task.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET assignee_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
