//! Rules tying tasks to sprints.

use crate::error::CoreError;
use crate::status::SprintStatus;

/// Message returned when a task write targets a completed sprint.
pub const CLOSED_SPRINT_MESSAGE: &str = "Cannot add or move tasks to a closed sprint.";

/// Reject a task create/update whose payload references a completed sprint.
///
/// Only the sprint named in the payload is checked; tasks already sitting in
/// a sprint that has since closed are left alone.
pub fn ensure_sprint_accepts_tasks(sprint_status: Option<SprintStatus>) -> Result<(), CoreError> {
    match sprint_status {
        Some(SprintStatus::Completed) => Err(CoreError::field("sprint", CLOSED_SPRINT_MESSAGE)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn no_sprint_is_accepted() {
        assert!(ensure_sprint_accepts_tasks(None).is_ok());
    }

    #[test]
    fn open_sprints_are_accepted() {
        assert!(ensure_sprint_accepts_tasks(Some(SprintStatus::Planned)).is_ok());
        assert!(ensure_sprint_accepts_tasks(Some(SprintStatus::Active)).is_ok());
    }

    #[test]
    fn completed_sprint_is_rejected_under_sprint_key() {
        let err = ensure_sprint_accepts_tasks(Some(SprintStatus::Completed)).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref fields) => {
            assert_eq!(fields["sprint"], vec![CLOSED_SPRINT_MESSAGE.to_string()]);
        });
    }
}
