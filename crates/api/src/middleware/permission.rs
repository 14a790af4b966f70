//! Policy-checked authentication extractor.
//!
//! [`Permitted<P>`] authenticates the caller and runs the request-level check
//! of policy `P` against the request method. Because it only reads the
//! request parts, placing it before the body extractor means a forbidden
//! write is refused before its payload is parsed or validated.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracker_core::permissions::{self, Access, PermissionTarget, Policy};

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// An authenticated caller that passed `P`'s request-level check.
///
/// ```ignore
/// async fn update(
///     permitted: Permitted<AssigneeOrAdmin>,
///     ApiPath(id): ApiPath<DbId>,
///     ApiJson(input): ApiJson<UpdateTask>,
/// ) -> AppResult<Json<Task>> {
///     let task = load(id).await?;
///     permitted.check_object(&task)?;
///     ...
/// }
/// ```
pub struct Permitted<P> {
    pub user: AuthUser,
    pub access: Access,
    policy: PhantomData<fn() -> P>,
}

impl<P: Policy + Default> Permitted<P> {
    /// Run `P`'s object-level check against an already-loaded object.
    pub fn check_object(&self, object: &dyn PermissionTarget) -> AppResult<()> {
        let caller = self.user.caller();
        permissions::check_object(&P::default(), &caller, self.access, object).map_err(|e| {
            tracing::debug!(
                user_id = caller.user_id,
                policy = P::NAME,
                "Object permission denied"
            );
            AppError::Core(e)
        })
    }
}

impl<P: Policy + Default> FromRequestParts<AppState> for Permitted<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let access = Access::from_method(parts.method.as_str());
        let caller = user.caller();

        permissions::check(&P::default(), &caller, access).map_err(|e| {
            tracing::debug!(
                user_id = caller.user_id,
                policy = P::NAME,
                method = %parts.method,
                "Permission denied"
            );
            AppError::Core(e)
        })?;

        Ok(Permitted {
            user,
            access,
            policy: PhantomData,
        })
    }
}
