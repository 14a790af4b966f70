//! Handlers for the `/projects` resource.
//!
//! Reads are open to any authenticated caller; writes need the admin role
//! ([`AdminOrReadOnly`]).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracker_core::permissions::AdminOrReadOnly;
use tracker_core::types::DbId;
use tracker_core::validation::validate;
use tracker_db::models::project::{CreateProject, Project, UpdateProject};
use tracker_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::lookup::not_found;
use crate::middleware::permission::Permitted;
use crate::state::AppState;

type Guard = Permitted<AdminOrReadOnly>;

/// POST /api/projects
pub async fn create(
    permitted: Guard,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        user_id = permitted.user.user_id,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(_permitted: Guard, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    _permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Full replacement; an omitted description is reset to empty.
pub async fn replace(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<Json<Project>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Project", id))?;
    permitted.check_object(&existing)?;
    validate(&input)?;

    let project = ProjectRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Project", id))?;
    Ok(Json(project))
}

/// PATCH /api/projects/{id}
pub async fn update(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Project", id))?;
    permitted.check_object(&existing)?;
    validate(&input)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Cascades to the project's sprints and tasks.
pub async fn delete(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found("Project", id));
    }

    tracing::info!(project_id = id, user_id = permitted.user.user_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
