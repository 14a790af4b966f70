//! Shared lookups used by the resource handlers.
//!
//! Reference fields in write payloads (`project`, `sprint`, `assignee`) must
//! point at existing rows. Missing rows are reported as field errors, not as
//! 404s, since the request target itself exists.

use tracker_core::error::CoreError;
use tracker_core::sprint_rules::ensure_sprint_accepts_tasks;
use tracker_core::types::DbId;
use tracker_core::validation::FieldErrors;
use tracker_db::models::sprint::Sprint;
use tracker_db::repositories::{ProjectRepo, SprintRepo, UserRepo};
use tracker_db::DbPool;

use crate::error::{AppError, AppResult};

/// Build the 404 error for a missing entity.
pub fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

fn missing_reference(id: DbId) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// References named by a task or sprint payload. `None` means the payload
/// does not set that field.
#[derive(Debug, Default)]
pub struct References {
    pub project: Option<DbId>,
    pub sprint: Option<DbId>,
    pub assignee: Option<DbId>,
}

/// Resolve every reference in `refs`, collecting one error per missing row.
///
/// Returns the referenced sprint, when there is one, so the caller can apply
/// sprint rules without a second query.
pub async fn resolve_references(pool: &DbPool, refs: &References) -> AppResult<Option<Sprint>> {
    let mut errors = FieldErrors::new();

    if let Some(project) = refs.project {
        if !ProjectRepo::exists(pool, project).await? {
            errors.insert("project".into(), vec![missing_reference(project)]);
        }
    }

    let mut sprint = None;
    if let Some(sprint_id) = refs.sprint {
        sprint = SprintRepo::find_by_id(pool, sprint_id).await?;
        if sprint.is_none() {
            errors.insert("sprint".into(), vec![missing_reference(sprint_id)]);
        }
    }

    if let Some(assignee) = refs.assignee {
        if !UserRepo::exists(pool, assignee).await? {
            errors.insert("assignee".into(), vec![missing_reference(assignee)]);
        }
    }

    if errors.is_empty() {
        Ok(sprint)
    } else {
        Err(AppError::Core(CoreError::InvalidFields(errors)))
    }
}

/// Resolve a task payload's references and refuse a completed target sprint.
pub async fn check_task_write(pool: &DbPool, refs: &References) -> AppResult<()> {
    let sprint = resolve_references(pool, refs).await?;
    ensure_sprint_accepts_tasks(sprint.as_ref().and_then(Sprint::sprint_status))?;
    Ok(())
}
