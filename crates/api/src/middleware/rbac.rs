//! Role gate for the user-administration endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracker_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated caller holding the `admin` role; anyone else gets 403.
///
/// Resource endpoints use [`Permitted`](super::permission::Permitted)
/// instead, since their rules depend on the method and the row.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(RequireAdmin(user))
        } else {
            tracing::debug!(user_id = user.user_id, "Non-admin refused user administration");
            Err(AppError::Core(CoreError::Forbidden("Admin role required".into())))
        }
    }
}
