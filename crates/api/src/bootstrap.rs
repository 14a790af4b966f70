//! Startup provisioning of the initial admin account.

use tracker_core::roles::ROLE_ADMIN_ID;
use tracker_db::models::user::CreateUser;
use tracker_db::repositories::UserRepo;
use tracker_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured admin account unless a user with that username
/// already exists. Returns `true` when a user was created.
///
/// An existing account is never modified, so rotating `ADMIN_PASSWORD` has no
/// effect once the account exists.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already present");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role_id: ROLE_ADMIN_ID,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}
