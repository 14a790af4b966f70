//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO, also used for full (`PUT`) replacement
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for `PATCH`

pub mod project;
pub mod role;
pub mod serde_helpers;
pub mod sprint;
pub mod task;
pub mod user;
