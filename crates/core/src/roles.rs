//! Well-known role name constants.
//!
//! These must match the seed data in `20250101000002_create_users.sql`.

/// Administrative ("staff") role. Bypasses ownership checks.
pub const ROLE_ADMIN: &str = "admin";

/// Regular team member.
pub const ROLE_MEMBER: &str = "member";

/// Seeded id of the `admin` role.
pub const ROLE_ADMIN_ID: crate::types::DbId = 1;

/// Seeded id of the `member` role.
pub const ROLE_MEMBER_ID: crate::types::DbId = 2;
