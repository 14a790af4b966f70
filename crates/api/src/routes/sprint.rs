//! Route definitions for the `/sprints` resource.

use axum::routing::get;
use axum::Router;

use super::slashed;
use crate::handlers::sprint;
use crate::state::AppState;

/// ```text
/// GET    /sprints       -> list
/// POST   /sprints       -> create
/// GET    /sprints/{id}  -> get_by_id
/// PUT    /sprints/{id}  -> replace
/// PATCH  /sprints/{id}  -> update
/// DELETE /sprints/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    let router = slashed(Router::new(), "/sprints", get(sprint::list).post(sprint::create));
    slashed(
        router,
        "/sprints/{id}",
        get(sprint::get_by_id)
            .put(sprint::replace)
            .patch(sprint::update)
            .delete(sprint::delete),
    )
}
