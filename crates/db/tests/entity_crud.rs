//! Integration tests for project / sprint / task persistence.
//!
//! Exercises the repository layer against a real database:
//! - Column defaults for status and priority
//! - Cascade delete behaviour
//! - Assignee cleared when the user is deleted
//! - Partial updates, including explicit `null` clears
//! - `updated_at` refreshed by trigger

use sqlx::PgPool;
use tracker_core::roles::{ROLE_ADMIN_ID, ROLE_MEMBER_ID};
use tracker_core::status::{SprintStatus, TaskPriority, TaskStatus};
use tracker_db::models::project::{CreateProject, UpdateProject};
use tracker_db::models::sprint::{CreateSprint, UpdateSprint};
use tracker_db::models::task::{CreateTask, UpdateTask};
use tracker_db::models::user::CreateUser;
use tracker_db::repositories::{ProjectRepo, RoleRepo, SprintRepo, TaskRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: Some(name.to_string()),
        description: String::new(),
    }
}

fn new_sprint(project: i64, name: &str) -> CreateSprint {
    CreateSprint {
        project: Some(project),
        name: Some(name.to_string()),
        start_date: Some("2023-01-01".parse().unwrap()),
        end_date: Some("2023-01-15".parse().unwrap()),
        status: None,
    }
}

fn new_task(project: i64, sprint: Option<i64>, title: &str) -> CreateTask {
    CreateTask {
        project: Some(project),
        sprint,
        assignee: None,
        title: Some(title.to_string()),
        description: String::new(),
        status: None,
        priority: None,
        completed_at: None,
        due_date: None,
    }
}

fn new_user(username: &str, role_id: i64) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "not-a-real-hash".to_string(),
        role_id,
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_defaults_applied_on_create(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Defaults")).await.unwrap();
    let sprint = SprintRepo::create(&pool, &new_sprint(project.id, "S1")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, Some(sprint.id), "T1"))
        .await
        .unwrap();

    assert_eq!(sprint.status, SprintStatus::Planned.id());
    assert_eq!(task.status, TaskStatus::ToDo.id());
    assert_eq!(task.priority, TaskPriority::Medium.id());
    assert_eq!(task.sprint_id, Some(sprint.id));
    assert_eq!(task.assignee_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roles_are_seeded(pool: PgPool) {
    assert_eq!(RoleRepo::resolve_name(&pool, ROLE_ADMIN_ID).await.unwrap(), "admin");
    assert_eq!(RoleRepo::resolve_name(&pool, ROLE_MEMBER_ID).await.unwrap(), "member");
    assert_eq!(RoleRepo::resolve_name(&pool, 99).await.unwrap(), "unknown");

    let admin = RoleRepo::find_by_id(&pool, ROLE_ADMIN_ID).await.unwrap().unwrap();
    assert_eq!(admin.name, "admin");
    assert!(RoleRepo::find_by_id(&pool, 99).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_cascades(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed")).await.unwrap();
    let sprint = SprintRepo::create(&pool, &new_sprint(project.id, "S")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, None, "T")).await.unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(SprintRepo::find_by_id(&pool, sprint.id).await.unwrap().is_none());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sprint_delete_cascades_to_its_tasks_only(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let sprint = SprintRepo::create(&pool, &new_sprint(project.id, "S")).await.unwrap();
    let in_sprint = TaskRepo::create(&pool, &new_task(project.id, Some(sprint.id), "in"))
        .await
        .unwrap();
    let backlog = TaskRepo::create(&pool, &new_task(project.id, None, "backlog"))
        .await
        .unwrap();

    assert!(SprintRepo::delete(&pool, sprint.id).await.unwrap());

    assert!(TaskRepo::find_by_id(&pool, in_sprint.id).await.unwrap().is_none());
    assert!(TaskRepo::find_by_id(&pool, backlog.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_delete_clears_assignee(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("leaver", ROLE_MEMBER_ID)).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, None, "T")).await.unwrap();
    let assigned = TaskRepo::assign(&pool, task.id, user.id).await.unwrap().unwrap();
    assert_eq!(assigned.assignee_id, Some(user.id));

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    let task = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(task.assignee_id, None);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_project_update_keeps_other_fields(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: Some("Original".into()),
            description: "Keep me".into(),
        },
    )
    .await
    .unwrap();

    let update = UpdateProject {
        name: Some("Renamed".into()),
        description: None,
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, "Keep me");
    assert_eq!(updated.created_at, project.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sprint_status_update(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let sprint = SprintRepo::create(&pool, &new_sprint(project.id, "S")).await.unwrap();

    let update = UpdateSprint {
        status: Some(SprintStatus::Completed.id()),
        ..Default::default()
    };
    let updated = SprintRepo::update(&pool, sprint.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.sprint_status(), Some(SprintStatus::Completed));
    assert_eq!(updated.name, "S");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_update_null_clears_sprint(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let sprint = SprintRepo::create(&pool, &new_sprint(project.id, "S")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, Some(sprint.id), "T"))
        .await
        .unwrap();

    // Absent sprint leaves it in place.
    let update = UpdateTask {
        title: Some("Retitled".into()),
        ..Default::default()
    };
    let updated = TaskRepo::update(&pool, task.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.sprint_id, Some(sprint.id));
    assert_eq!(updated.title, "Retitled");

    // Explicit null moves it back to the backlog.
    let update = UpdateTask {
        sprint: Some(None),
        ..Default::default()
    };
    let updated = TaskRepo::update(&pool, task.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.sprint_id, None);
    assert_eq!(updated.title, "Retitled");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_update_refreshes_updated_at(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, None, "T")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let update = UpdateTask {
        status: Some(TaskStatus::InProgress.id()),
        ..Default::default()
    };
    let updated = TaskRepo::update(&pool, task.id, &update).await.unwrap().unwrap();

    assert!(updated.updated_at > task.updated_at);
    assert_eq!(updated.created_at, task.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_replace_resets_omitted_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let mut input = new_task(project.id, None, "T");
    input.priority = Some(TaskPriority::Hotfix.id());
    input.description = "something".into();
    let task = TaskRepo::create(&pool, &input).await.unwrap();

    let replaced = TaskRepo::replace(&pool, task.id, &new_task(project.id, None, "T2"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.title, "T2");
    assert_eq!(replaced.description, "");
    assert_eq!(replaced.priority, TaskPriority::Medium.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_rows_return_none(pool: PgPool) {
    assert!(ProjectRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(!ProjectRepo::exists(&pool, 999_999).await.unwrap());
    assert!(!UserRepo::exists(&pool, 999_999).await.unwrap());
    assert!(TaskRepo::assign(&pool, 999_999, 1).await.unwrap().is_none());
    assert!(!TaskRepo::delete(&pool, 999_999).await.unwrap());
    assert!(SprintRepo::update(&pool, 999_999, &UpdateSprint::default())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dupe", ROLE_ADMIN_ID)).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dupe", ROLE_MEMBER_ID))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}
