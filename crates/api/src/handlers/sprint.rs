//! Handlers for the `/sprints` resource. Same policy as projects.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracker_core::permissions::AdminOrReadOnly;
use tracker_core::types::DbId;
use tracker_core::validation::validate;
use tracker_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};
use tracker_db::repositories::SprintRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::lookup::{not_found, resolve_references, References};
use crate::middleware::permission::Permitted;
use crate::state::AppState;

type Guard = Permitted<AdminOrReadOnly>;

/// POST /api/sprints
pub async fn create(
    permitted: Guard,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSprint>,
) -> AppResult<(StatusCode, Json<Sprint>)> {
    validate(&input)?;
    resolve_references(
        &state.pool,
        &References {
            project: input.project,
            ..Default::default()
        },
    )
    .await?;

    let sprint = SprintRepo::create(&state.pool, &input).await?;

    tracing::info!(
        sprint_id = sprint.id,
        project_id = sprint.project_id,
        user_id = permitted.user.user_id,
        "Sprint created"
    );
    Ok((StatusCode::CREATED, Json(sprint)))
}

/// GET /api/sprints
pub async fn list(_permitted: Guard, State(state): State<AppState>) -> AppResult<Json<Vec<Sprint>>> {
    let sprints = SprintRepo::list(&state.pool).await?;
    Ok(Json(sprints))
}

/// GET /api/sprints/{id}
pub async fn get_by_id(
    _permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Sprint>> {
    let sprint = SprintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Sprint", id))?;
    Ok(Json(sprint))
}

/// PUT /api/sprints/{id}
///
/// Full replacement; an omitted status is reset to Planned.
pub async fn replace(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateSprint>,
) -> AppResult<Json<Sprint>> {
    let existing = SprintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Sprint", id))?;
    permitted.check_object(&existing)?;
    validate(&input)?;
    resolve_references(
        &state.pool,
        &References {
            project: input.project,
            ..Default::default()
        },
    )
    .await?;

    let sprint = SprintRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Sprint", id))?;
    Ok(Json(sprint))
}

/// PATCH /api/sprints/{id}
pub async fn update(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateSprint>,
) -> AppResult<Json<Sprint>> {
    let existing = SprintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Sprint", id))?;
    permitted.check_object(&existing)?;
    validate(&input)?;
    resolve_references(
        &state.pool,
        &References {
            project: input.project,
            ..Default::default()
        },
    )
    .await?;

    let sprint = SprintRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Sprint", id))?;

    if sprint.status != existing.status {
        tracing::info!(
            sprint_id = id,
            from = existing.status,
            to = sprint.status,
            "Sprint status changed"
        );
    }
    Ok(Json(sprint))
}

/// DELETE /api/sprints/{id}
///
/// Cascades to the sprint's tasks.
pub async fn delete(
    permitted: Guard,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !SprintRepo::delete(&state.pool, id).await? {
        return Err(not_found("Sprint", id));
    }

    tracing::info!(sprint_id = id, user_id = permitted.user.user_id, "Sprint deleted");
    Ok(StatusCode::NO_CONTENT)
}
