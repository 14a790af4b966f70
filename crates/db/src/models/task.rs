//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::permissions::PermissionTarget;
use tracker_core::status::{validate_task_priority, validate_task_status, StatusId};
use tracker_core::types::{Date, DbId, Timestamp};
use tracker_core::validation::validate_not_blank;
use validator::Validate;

use crate::models::serde_helpers::double_option;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[serde(rename = "sprint")]
    pub sprint_id: Option<DbId>,
    #[serde(rename = "assignee")]
    pub assignee_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub status: StatusId,
    pub priority: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub due_date: Option<Date>,
}

impl PermissionTarget for Task {
    fn assignee_id(&self) -> Option<DbId> {
        self.assignee_id
    }
}

/// DTO for creating (or fully replacing) a task.
///
/// On replacement, omitted optional fields are reset to their defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(required(message = "This field is required."))]
    pub project: Option<DbId>,
    pub sprint: Option<DbId>,
    pub assignee: Option<DbId>,
    #[validate(
        required(message = "This field is required."),
        length(max = 256, message = "Ensure this field has no more than 256 characters."),
        custom(function = "validate_not_blank")
    )]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Defaults to 0 (To Do) if omitted.
    #[validate(custom(function = "validate_task_status"))]
    pub status: Option<StatusId>,
    /// Defaults to 1 (Medium) if omitted.
    #[validate(custom(function = "validate_task_priority"))]
    pub priority: Option<StatusId>,
    pub completed_at: Option<Timestamp>,
    pub due_date: Option<Date>,
}

/// DTO for partially updating a task. All fields are optional.
///
/// Nullable columns use `Option<Option<T>>` so that an explicit `null`
/// clears the value while an absent key leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    pub project: Option<DbId>,
    #[serde(default, deserialize_with = "double_option")]
    pub sprint: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee: Option<Option<DbId>>,
    #[validate(
        length(max = 256, message = "Ensure this field has no more than 256 characters."),
        custom(function = "validate_not_blank")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_task_status"))]
    pub status: Option<StatusId>,
    #[validate(custom(function = "validate_task_priority"))]
    pub priority: Option<StatusId>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed_at: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<Date>>,
}

impl UpdateTask {
    /// The sprint this update moves the task into, if it names one.
    pub fn target_sprint(&self) -> Option<DbId> {
        self.sprint.flatten()
    }
}
