//! Handlers for the `/admin` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracker_core::error::CoreError;
use tracker_core::types::DbId;
use tracker_core::validation::validate;
use tracker_db::models::user::{CreateUser, User, UserResponse};
use tracker_db::repositories::{RoleRepo, UserRepo};
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::lookup::not_found;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be between 1 and 150 characters."))]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    pub role_id: DbId,
}

/// POST /api/admin/users
///
/// Create a new user. Hashes the password and returns a safe
/// [`UserResponse`] with 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(input): ApiJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate(&input)?;

    let role = RoleRepo::find_by_id(&state.pool, input.role_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::field(
                "role_id",
                format!("Invalid pk \"{}\" - object does not exist.", input.role_id),
            ))
        })?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash: hashed,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %role.name,
        admin_id = admin.user_id,
        "User created"
    );
    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user, role.name))))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;

    let mut responses = Vec::with_capacity(users.len());
    for user in &users {
        responses.push(user_to_response(&state, user).await?);
    }
    Ok(Json(responses))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("User", id))?;
    Ok(Json(user_to_response(&state, &user).await?))
}

/// DELETE /api/admin/users/{id}
///
/// Tasks assigned to the user survive with their assignee cleared.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete your own account".into(),
        )));
    }

    if !UserRepo::delete(&state.pool, id).await? {
        return Err(not_found("User", id));
    }

    tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn user_to_response(state: &AppState, user: &User) -> AppResult<UserResponse> {
    let role_name = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(UserResponse::from_user(user, role_name))
}
