//! Sprint entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::permissions::PermissionTarget;
use tracker_core::status::{validate_sprint_status, SprintStatus, StatusId};
use tracker_core::types::{Date, DbId};
use tracker_core::validation::validate_not_blank;
use validator::Validate;

/// A sprint row from the `sprints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sprint {
    pub id: DbId,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: StatusId,
}

impl Sprint {
    /// Typed view of the stored status. Unknown ids are prevented by a CHECK constraint.
    pub fn sprint_status(&self) -> Option<SprintStatus> {
        SprintStatus::from_id(self.status)
    }
}

impl PermissionTarget for Sprint {}

/// DTO for creating (or fully replacing) a sprint.
///
/// Required fields are `Option` so that absence is reported per field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSprint {
    #[validate(required(message = "This field is required."))]
    pub project: Option<DbId>,
    #[validate(
        required(message = "This field is required."),
        length(max = 128, message = "Ensure this field has no more than 128 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub start_date: Option<Date>,
    #[validate(required(message = "This field is required."))]
    pub end_date: Option<Date>,
    /// Defaults to 0 (Planned) if omitted.
    #[validate(custom(function = "validate_sprint_status"))]
    pub status: Option<StatusId>,
}

/// DTO for partially updating a sprint. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSprint {
    pub project: Option<DbId>,
    #[validate(
        length(max = 128, message = "Ensure this field has no more than 128 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[validate(custom(function = "validate_sprint_status"))]
    pub status: Option<StatusId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse_from_iso_strings() {
        let input: CreateSprint = serde_json::from_value(serde_json::json!({
            "project": 1,
            "name": "Sprint 1",
            "start_date": "2023-02-01",
            "end_date": "2023-02-15",
        }))
        .unwrap();
        assert_eq!(input.start_date.map(|d| d.to_string()).as_deref(), Some("2023-02-01"));
        assert_eq!(input.status, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let input: CreateSprint =
            serde_json::from_value(serde_json::json!({"name": " ", "end_date": null})).unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["project"][0].code, "required");
        assert_eq!(fields["start_date"][0].code, "required");
        assert_eq!(fields["end_date"][0].code, "required");
        assert_eq!(fields["name"][0].code, "blank");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let input = UpdateSprint {
            status: Some(7),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }

    #[test]
    fn serializes_project_as_bare_id() {
        let sprint = Sprint {
            id: 3,
            project_id: 1,
            name: "S".into(),
            start_date: "2023-01-01".parse().unwrap(),
            end_date: "2023-01-15".parse().unwrap(),
            status: SprintStatus::Active.id(),
        };
        let json = serde_json::to_value(&sprint).unwrap();
        assert_eq!(json["project"], 1);
        assert_eq!(json["status"], 1);
        assert_eq!(json["end_date"], "2023-01-15");
        assert!(json.get("project_id").is_none());
    }
}
