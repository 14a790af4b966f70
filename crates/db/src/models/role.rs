//! Role entity model.

use sqlx::FromRow;
use tracker_core::types::DbId;

/// One of the seeded roles (`admin`, `member`).
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
}
