//! Route definitions for the `/tasks` resource.

use axum::routing::{get, patch};
use axum::Router;

use super::slashed;
use crate::handlers::task;
use crate::state::AppState;

/// ```text
/// GET    /tasks              -> list
/// POST   /tasks              -> create
/// GET    /tasks/{id}         -> get_by_id
/// PUT    /tasks/{id}         -> replace
/// PATCH  /tasks/{id}         -> update
/// DELETE /tasks/{id}         -> delete
/// PATCH  /tasks/{id}/assign  -> assign
/// ```
pub fn router() -> Router<AppState> {
    let router = slashed(Router::new(), "/tasks", get(task::list).post(task::create));
    let router = slashed(
        router,
        "/tasks/{id}",
        get(task::get_by_id)
            .put(task::replace)
            .patch(task::update)
            .delete(task::delete),
    );
    slashed(router, "/tasks/{id}/assign", patch(task::assign))
}
