//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::permissions::PermissionTarget;
use tracker_core::types::{DbId, Timestamp};
use tracker_core::validation::validate_not_blank;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl PermissionTarget for Project {}

/// DTO for creating (or fully replacing) a project.
///
/// `name` is optional at the serde level so that a missing or `null` name is
/// reported as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(
        required(message = "This field is required."),
        length(max = 128, message = "Ensure this field has no more than 128 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// DTO for partially updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(
        length(max = 128, message = "Ensure this field has no more than 128 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}
