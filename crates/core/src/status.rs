//! Integer-backed choice enums for sprints and tasks.
//!
//! Each enum variant's discriminant is the value stored in the `SMALLINT`
//! column and exposed on the wire. Values are zero-based.

use std::borrow::Cow;

use validator::ValidationError;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, validator = $validator:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Look up the variant stored under `id`.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        /// `validator` custom hook rejecting ids outside the declared choices.
        pub fn $validator(value: &StatusId) -> Result<(), ValidationError> {
            if $name::from_id(*value).is_some() {
                Ok(())
            } else {
                Err(ValidationError::new("invalid_choice")
                    .with_message(Cow::Owned(format!("\"{value}\" is not a valid choice."))))
            }
        }
    };
}

define_choice_enum! {
    /// Sprint lifecycle: Planned -> Active -> Completed.
    SprintStatus, validator = validate_sprint_status {
        Planned = 0,
        Active = 1,
        Completed = 2,
    }
}

define_choice_enum! {
    /// Task progress status.
    TaskStatus, validator = validate_task_status {
        ToDo = 0,
        InProgress = 1,
        Done = 2,
    }
}

define_choice_enum! {
    /// Task priority.
    TaskPriority, validator = validate_task_priority {
        Low = 0,
        Medium = 1,
        High = 2,
        Hotfix = 3,
    }
}

impl Default for SprintStatus {
    fn default() -> Self {
        SprintStatus::Planned
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::ToDo
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for status in [SprintStatus::Planned, SprintStatus::Active, SprintStatus::Completed] {
            assert_eq!(SprintStatus::from_id(status.id()), Some(status));
        }
        for priority in [TaskPriority::Low, TaskPriority::Hotfix] {
            assert_eq!(TaskPriority::from_id(priority.id()), Some(priority));
        }
    }

    #[test]
    fn discriminants_match_wire_values() {
        assert_eq!(SprintStatus::Completed.id(), 2);
        assert_eq!(TaskStatus::InProgress.id(), 1);
        assert_eq!(TaskPriority::Hotfix.id(), 3);
    }

    #[test]
    fn defaults() {
        assert_eq!(SprintStatus::default(), SprintStatus::Planned);
        assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(TaskStatus::from_id(3), None);
        assert_eq!(SprintStatus::from_id(-1), None);

        let err = validate_task_priority(&4).unwrap_err();
        assert_eq!(err.code, "invalid_choice");
        assert_eq!(
            err.message.as_deref(),
            Some("\"4\" is not a valid choice.")
        );
        assert!(validate_sprint_status(&1).is_ok());
    }
}
