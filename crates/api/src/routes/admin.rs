//! Route definitions for `/admin`.

use axum::routing::get;
use axum::Router;

use super::slashed;
use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET    /admin/users       -> list_users
/// POST   /admin/users       -> create_user
/// GET    /admin/users/{id}  -> get_user
/// DELETE /admin/users/{id}  -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    let router = slashed(
        Router::new(),
        "/admin/users",
        get(admin::list_users).post(admin::create_user),
    );
    slashed(
        router,
        "/admin/users/{id}",
        get(admin::get_user).delete(admin::delete_user),
    )
}
