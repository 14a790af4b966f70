//! Repository for the `sprints` table.

use sqlx::PgPool;
use tracker_core::status::SprintStatus;
use tracker_core::types::DbId;

use crate::models::sprint::{CreateSprint, Sprint, UpdateSprint};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, start_date, end_date, status";

/// Provides CRUD operations for sprints.
pub struct SprintRepo;

impl SprintRepo {
    /// Insert a new sprint, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to Planned.
    pub async fn create(pool: &PgPool, input: &CreateSprint) -> Result<Sprint, sqlx::Error> {
        let query = format!(
            "INSERT INTO sprints (project_id, name, start_date, end_date, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(input.project)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status)
            .bind(SprintStatus::default().id())
            .fetch_one(pool)
            .await
    }

    /// Find a sprint by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sprint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprints WHERE id = $1");
        sqlx::query_as::<_, Sprint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sprints ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sprint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprints ORDER BY id ASC");
        sqlx::query_as::<_, Sprint>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable column of a sprint. A missing status resets to Planned.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateSprint,
    ) -> Result<Option<Sprint>, sqlx::Error> {
        let query = format!(
            "UPDATE sprints SET
                project_id = $2,
                name = $3,
                start_date = $4,
                end_date = $5,
                status = COALESCE($6, $7)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(id)
            .bind(input.project)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status)
            .bind(SprintStatus::default().id())
            .fetch_optional(pool)
            .await
    }

    /// Update a sprint. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSprint,
    ) -> Result<Option<Sprint>, sqlx::Error> {
        let query = format!(
            "UPDATE sprints SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(id)
            .bind(input.project)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sprint and, through `ON DELETE CASCADE`, its tasks.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sprints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
