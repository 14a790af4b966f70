//! Handlers for the `/tasks` resource.
//!
//! Any authenticated caller may create tasks; changing or deleting an existing
//! task requires the admin role or being its assignee ([`AssigneeOrAdmin`]).
//! Every write that names a sprint is refused when that sprint is completed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracker_core::error::CoreError;
use tracker_core::permissions::AssigneeOrAdmin;
use tracker_core::types::DbId;
use tracker_core::validation::validate;
use tracker_db::models::task::{CreateTask, Task, UpdateTask};
use tracker_db::repositories::{TaskRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::lookup::{check_task_write, not_found, References};
use crate::middleware::permission::Permitted;
use crate::state::AppState;

type Guard = Permitted<AssigneeOrAdmin>;

/// Request body for `PATCH /tasks/{id}/assign`.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    #[serde(default)]
    pub user: Option<DbId>,
}

async fn load(state: &AppState, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Task", id))
}

fn create_refs(input: &CreateTask) -> References {
    References {
        project: input.project,
        sprint: input.sprint,
        assignee: input.assignee,
    }
}

/// POST /api/tasks
pub async fn create(
    permitted: Guard,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate(&input)?;
    check_task_write(&state.pool, &create_refs(&input)).await?;

    let task = TaskRepo::create(&state.pool, &input).await?;

    tracing::info!(
        task_id = task.id,
        project_id = task.project_id,
        sprint_id = ?task.sprint_id,
        user_id = permitted.user.user_id,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list(_permitted: Guard, State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    _permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Task>> {
    Ok(Json(load(&state, id).await?))
}

/// PUT /api/tasks/{id}
///
/// Full replacement; omitted optional fields are reset.
pub async fn replace(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateTask>,
) -> AppResult<Json<Task>> {
    let existing = load(&state, id).await?;
    permitted.check_object(&existing)?;
    validate(&input)?;
    check_task_write(&state.pool, &create_refs(&input)).await?;

    let task = TaskRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Task", id))?;

    tracing::info!(task_id = id, user_id = permitted.user.user_id, "Task replaced");
    Ok(Json(task))
}

/// PATCH /api/tasks/{id}
///
/// Only the sprint named in the payload is checked against the closed-sprint
/// rule; a task already in a sprint that has since closed can still be edited.
pub async fn update(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let existing = load(&state, id).await?;
    permitted.check_object(&existing)?;
    validate(&input)?;
    check_task_write(
        &state.pool,
        &References {
            project: input.project,
            sprint: input.target_sprint(),
            assignee: input.assignee.flatten(),
        },
    )
    .await?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Task", id))?;

    tracing::info!(task_id = id, user_id = permitted.user.user_id, "Task updated");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = load(&state, id).await?;
    permitted.check_object(&existing)?;

    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(not_found("Task", id));
    }

    tracing::info!(task_id = id, user_id = permitted.user.user_id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/tasks/{id}/assign
///
/// Checks run in order: task exists (404), caller may modify it (403), a
/// `user` is given (400), that user exists (404). Answers 200 with no body.
pub async fn assign(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<AssignRequest>,
) -> AppResult<StatusCode> {
    let existing = load(&state, id).await?;
    permitted.check_object(&existing)?;

    let user_id = match input.user {
        Some(user_id) if user_id != 0 => user_id,
        _ => return Err(AppError::BadRequest("user is required".into())),
    };

    if !UserRepo::exists(&state.pool, user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    TaskRepo::assign(&state.pool, id, user_id)
        .await?
        .ok_or_else(|| not_found("Task", id))?;

    tracing::info!(
        task_id = id,
        assignee_id = user_id,
        previous_assignee_id = ?existing.assignee_id,
        user_id = permitted.user.user_id,
        "Task assigned"
    );
    Ok(StatusCode::OK)
}
