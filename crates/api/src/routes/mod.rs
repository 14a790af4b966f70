pub mod admin;
pub mod auth;
pub mod health;
pub mod project;
pub mod sprint;
pub mod task;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/me                         current user (requires auth)
///
/// /admin/users                     list, create (admin only)
/// /admin/users/{id}                get, delete (admin only)
///
/// /projects                        list, create
/// /projects/{id}                   get, replace, update, delete
///
/// /sprints                         list, create
/// /sprints/{id}                    get, replace, update, delete
///
/// /tasks                           list, create
/// /tasks/{id}                      get, replace, update, delete
/// /tasks/{id}/assign               assign (PATCH)
/// ```
///
/// Resource routes answer with and without a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(admin::router())
        .merge(project::router())
        .merge(sprint::router())
        .merge(task::router())
}

/// Register `handler` at both `path` and `path/`.
pub(crate) fn slashed(
    router: Router<AppState>,
    path: &str,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}
