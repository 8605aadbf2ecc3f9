//! Shared contract suite for the two storage backends.
//!
//! Every case runs once against `MemoryStorage` and once against
//! `DatabaseStorage` over a migrated in-memory SQLite database; behavior
//! must not diverge.

use chrono::NaiveDate;
use db::models::user::Role;
use db::models::{assignment, schedule_slot, submission};
use db::storage::{
    AssignmentPatch, DatabaseStorage, MemoryStorage, NewAssignment, NewEvent, NewMessage,
    NewNotice, NewResource, NewScheduleSlot, NewSubmission, NewTodo, NewUser, ScheduleSlotPatch,
    Storage, StorageError, SubmissionFilter, TodoPatch, UserPatch,
};

async fn backends() -> Vec<(&'static str, Box<dyn Storage>)> {
    vec![
        ("memory", Box::new(MemoryStorage::new()) as Box<dyn Storage>),
        (
            "database",
            Box::new(DatabaseStorage::new(db::test_utils::setup_test_db().await)),
        ),
    ]
}

fn new_user(username: &str, role: Role) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "correct horse battery".to_string(),
        full_name: "Test User".to_string(),
        role,
        student_number: None,
        section: None,
        department: None,
        year: None,
        semester: None,
        cgpa: None,
    }
}

fn new_assignment(title: &str, posted: NaiveDate) -> NewAssignment {
    NewAssignment {
        title: title.to_string(),
        course: "Database Systems".to_string(),
        course_code: "CSE-301".to_string(),
        due_date: posted + chrono::Duration::days(7),
        status: assignment::Status::Pending,
        description: None,
        posted_date: posted,
        file_url: None,
    }
}

fn new_resource(title: &str, category: &str, uploaded: NaiveDate) -> NewResource {
    NewResource {
        title: title.to_string(),
        course_code: Some("CSE-301".to_string()),
        category: category.to_string(),
        file_type: "PDF".to_string(),
        file_size: Some("1.0 MB".to_string()),
        file_url: format!("/resources/{title}.pdf"),
        upload_date: uploaded,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn user_create_then_get_roundtrip() {
    for (name, storage) in backends().await {
        let created = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        assert!(created.id > 0, "{name}: id must be assigned");
        assert_ne!(
            created.password_hash, "correct horse battery",
            "{name}: password must be hashed"
        );
        assert!(created.verify_password("correct horse battery"), "{name}");
        assert!(!created.verify_password("wrong"), "{name}");

        let fetched = storage.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created, "{name}");

        let by_name = storage.get_user_by_username("alice").await.unwrap();
        assert_eq!(by_name, Some(created), "{name}");
        assert_eq!(
            storage.get_user_by_username("nobody").await.unwrap(),
            None,
            "{name}"
        );
    }
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    for (name, storage) in backends().await {
        storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        let err = storage
            .create_user(new_user("alice", Role::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)), "{name}: {err}");
        assert_eq!(storage.list_users(None).await.unwrap().len(), 1, "{name}");
    }
}

#[tokio::test]
async fn user_patch_cannot_touch_role_or_username() {
    for (name, storage) in backends().await {
        let created = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();

        let updated = storage
            .update_user(
                created.id,
                UserPatch {
                    full_name: Some("Alice Rahman".to_string()),
                    section: Some("B".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.full_name, "Alice Rahman", "{name}");
        assert_eq!(updated.section.as_deref(), Some("B"), "{name}");
        assert_eq!(updated.username, "alice", "{name}");
        assert_eq!(updated.role, Role::Student, "{name}");

        assert!(
            storage
                .update_user(9999, UserPatch::default())
                .await
                .unwrap()
                .is_none(),
            "{name}: update of unknown id must not create"
        );
    }
}

#[tokio::test]
async fn list_users_filters_by_role() {
    for (name, storage) in backends().await {
        storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        storage
            .create_user(new_user("root", Role::Admin))
            .await
            .unwrap();

        let students = storage.list_users(Some(Role::Student)).await.unwrap();
        assert_eq!(students.len(), 1, "{name}");
        assert_eq!(students[0].username, "alice", "{name}");
        assert_eq!(storage.list_users(None).await.unwrap().len(), 2, "{name}");
    }
}

#[tokio::test]
async fn assignment_lifecycle() {
    for (name, storage) in backends().await {
        let created = storage
            .create_assignment(new_assignment("Normalization", date(2026, 1, 10)))
            .await
            .unwrap();
        let fetched = storage.get_assignment(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created, "{name}");

        let updated = storage
            .update_assignment(
                created.id,
                AssignmentPatch {
                    status: Some(assignment::Status::Graded),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, assignment::Status::Graded, "{name}");
        assert_eq!(updated.title, "Normalization", "{name}");

        assert!(
            storage
                .update_assignment(9999, AssignmentPatch::default())
                .await
                .unwrap()
                .is_none(),
            "{name}"
        );
        assert_eq!(
            storage.list_assignments().await.unwrap().len(),
            1,
            "{name}: failed update must not create"
        );

        assert!(storage.delete_assignment(created.id).await.unwrap(), "{name}");
        assert!(
            !storage.delete_assignment(created.id).await.unwrap(),
            "{name}: second delete of the same id must return false"
        );
    }
}

#[tokio::test]
async fn assignments_list_newest_posting_first() {
    for (name, storage) in backends().await {
        let older = storage
            .create_assignment(new_assignment("older", date(2026, 1, 5)))
            .await
            .unwrap();
        let newer = storage
            .create_assignment(new_assignment("newer", date(2026, 1, 20)))
            .await
            .unwrap();

        let titles: Vec<_> = storage
            .list_assignments()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(titles, vec![newer.id, older.id], "{name}");
    }
}

#[tokio::test]
async fn resource_category_filter() {
    for (name, storage) in backends().await {
        storage
            .create_resource(new_resource("notes-w8", "Lecture Notes", date(2026, 1, 5)))
            .await
            .unwrap();
        let textbook = storage
            .create_resource(new_resource("db-concepts", "Textbooks", date(2026, 1, 6)))
            .await
            .unwrap();

        let filtered = storage.list_resources(Some("Textbooks")).await.unwrap();
        assert_eq!(filtered.len(), 1, "{name}");
        assert_eq!(filtered[0].id, textbook.id, "{name}");

        assert_eq!(storage.list_resources(None).await.unwrap().len(), 2, "{name}");
        assert!(
            storage
                .list_resources(Some("Reference Materials"))
                .await
                .unwrap()
                .is_empty(),
            "{name}"
        );

        assert!(storage.delete_resource(textbook.id).await.unwrap(), "{name}");
        assert!(!storage.delete_resource(textbook.id).await.unwrap(), "{name}");
    }
}

#[tokio::test]
async fn notice_expiry_is_stored_but_never_filters() {
    for (name, storage) in backends().await {
        let expired = storage
            .create_notice(NewNotice {
                title: "Old".to_string(),
                content: "Long gone".to_string(),
                category: "General".to_string(),
                posted_at: chrono::Utc::now() - chrono::Duration::days(30),
                expires_at: Some(chrono::Utc::now() - chrono::Duration::days(20)),
            })
            .await
            .unwrap();
        let current = storage
            .create_notice(NewNotice {
                title: "Current".to_string(),
                content: "Still on".to_string(),
                category: "Urgent".to_string(),
                posted_at: chrono::Utc::now(),
                expires_at: None,
            })
            .await
            .unwrap();

        let ids: Vec<_> = storage
            .list_notices()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![current.id, expired.id], "{name}");
    }
}

#[tokio::test]
async fn schedule_day_filter_and_update() {
    for (name, storage) in backends().await {
        let thursday = storage
            .create_schedule_slot(NewScheduleSlot {
                day: "Thursday".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:30".to_string(),
                course: "Database Systems".to_string(),
                course_code: "CSE-301".to_string(),
                room: Some("Lab 3".to_string()),
                building: None,
                slot_type: "Lab".to_string(),
                status: schedule_slot::Status::Active,
            })
            .await
            .unwrap();
        storage
            .create_schedule_slot(NewScheduleSlot {
                day: "Monday".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:30".to_string(),
                course: "Network Security".to_string(),
                course_code: "CSE-305".to_string(),
                room: None,
                building: None,
                slot_type: "Lecture".to_string(),
                status: schedule_slot::Status::Active,
            })
            .await
            .unwrap();

        let filtered = storage.list_schedule(Some("Thursday")).await.unwrap();
        assert_eq!(filtered.len(), 1, "{name}");
        assert_eq!(filtered[0].id, thursday.id, "{name}");

        let cancelled = storage
            .update_schedule_slot(
                thursday.id,
                ScheduleSlotPatch {
                    status: Some(schedule_slot::Status::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cancelled.status, schedule_slot::Status::Cancelled, "{name}");
        assert_eq!(cancelled.course, "Database Systems", "{name}");
    }
}

#[tokio::test]
async fn submissions_check_references_and_allow_resubmission() {
    for (name, storage) in backends().await {
        let student = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        let assignment = storage
            .create_assignment(new_assignment("Normalization", date(2026, 1, 10)))
            .await
            .unwrap();

        let missing_assignment = storage
            .create_submission(NewSubmission {
                assignment_id: 9999,
                student_id: student.id,
                submitted_at: Some(date(2026, 1, 12)),
                status: submission::Status::Submitted,
                grade: None,
                feedback: None,
            })
            .await
            .unwrap_err();
        assert!(
            matches!(missing_assignment, StorageError::NotFound(_)),
            "{name}"
        );

        let missing_student = storage
            .create_submission(NewSubmission {
                assignment_id: assignment.id,
                student_id: 9999,
                submitted_at: Some(date(2026, 1, 12)),
                status: submission::Status::Submitted,
                grade: None,
                feedback: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(missing_student, StorageError::NotFound(_)), "{name}");

        for _ in 0..2 {
            storage
                .create_submission(NewSubmission {
                    assignment_id: assignment.id,
                    student_id: student.id,
                    submitted_at: Some(date(2026, 1, 12)),
                    status: submission::Status::Submitted,
                    grade: None,
                    feedback: None,
                })
                .await
                .unwrap();
        }

        let per_pair = storage
            .list_submissions(SubmissionFilter {
                assignment_id: Some(assignment.id),
                student_id: Some(student.id),
            })
            .await
            .unwrap();
        assert_eq!(per_pair.len(), 2, "{name}: resubmission stays permitted");

        let other_student = storage
            .list_submissions(SubmissionFilter {
                assignment_id: None,
                student_id: Some(9999),
            })
            .await
            .unwrap();
        assert!(other_student.is_empty(), "{name}");
    }
}

#[tokio::test]
async fn todos_are_scoped_and_toggle() {
    for (name, storage) in backends().await {
        let alice = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        let bob = storage
            .create_user(new_user("bob", Role::Student))
            .await
            .unwrap();

        let todo = storage
            .create_todo(NewTodo {
                user_id: alice.id,
                text: "Buy milk".to_string(),
            })
            .await
            .unwrap();
        assert!(!todo.completed, "{name}: created todos start incomplete");

        let toggled = storage
            .update_todo(
                todo.id,
                TodoPatch {
                    text: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(toggled.completed, "{name}");
        assert_eq!(toggled.text, "Buy milk", "{name}: text must be unchanged");

        let alices = storage.list_todos(alice.id).await.unwrap();
        assert_eq!(alices.len(), 1, "{name}");
        assert!(alices[0].completed, "{name}");
        assert!(storage.list_todos(bob.id).await.unwrap().is_empty(), "{name}");

        assert!(storage.delete_todo(todo.id).await.unwrap(), "{name}");
        assert!(!storage.delete_todo(todo.id).await.unwrap(), "{name}");

        let missing_owner = storage
            .create_todo(NewTodo {
                user_id: 9999,
                text: "orphan".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(missing_owner, StorageError::NotFound(_)), "{name}");
    }
}

#[tokio::test]
async fn events_list_newest_first() {
    for (name, storage) in backends().await {
        let earlier = storage
            .create_event(NewEvent {
                title: "Midterm".to_string(),
                date: date(2026, 2, 1),
                category: "Exam".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let later = storage
            .create_event(NewEvent {
                title: "Finals".to_string(),
                date: date(2026, 3, 1),
                category: "Exam".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let ids: Vec<_> = storage
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![later.id, earlier.id], "{name}");
    }
}

#[tokio::test]
async fn message_visibility_and_read_flag() {
    for (name, storage) in backends().await {
        let alice = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();
        let bob = storage
            .create_user(new_user("bob", Role::Student))
            .await
            .unwrap();
        let carol = storage
            .create_user(new_user("carol", Role::Student))
            .await
            .unwrap();

        let direct = storage
            .create_message(NewMessage {
                sender_id: alice.id,
                recipient_id: Some(bob.id),
                content: "hi bob".to_string(),
            })
            .await
            .unwrap();
        let broadcast = storage
            .create_message(NewMessage {
                sender_id: alice.id,
                recipient_id: None,
                content: "hello everyone".to_string(),
            })
            .await
            .unwrap();

        let for_bob = storage.list_messages_for(bob.id).await.unwrap();
        assert_eq!(for_bob.len(), 2, "{name}: direct plus broadcast");

        let for_carol = storage.list_messages_for(carol.id).await.unwrap();
        assert_eq!(for_carol.len(), 1, "{name}: broadcast only");
        assert_eq!(for_carol[0].id, broadcast.id, "{name}");

        assert!(!direct.read, "{name}");
        let marked = storage
            .mark_message_read(direct.id)
            .await
            .unwrap()
            .unwrap();
        assert!(marked.read, "{name}");
        assert_eq!(marked.content, "hi bob", "{name}");

        assert!(storage.mark_message_read(9999).await.unwrap().is_none(), "{name}");

        let missing_recipient = storage
            .create_message(NewMessage {
                sender_id: alice.id,
                recipient_id: Some(9999),
                content: "void".to_string(),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(missing_recipient, StorageError::NotFound(_)),
            "{name}"
        );
    }
}

#[tokio::test]
async fn session_lifecycle() {
    for (name, storage) in backends().await {
        let user = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();

        let session = storage.create_session(user.id, 60).await.unwrap();
        assert_eq!(session.token.len(), 48, "{name}");

        let resolved = storage
            .resolve_session(&session.token, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.user_id, user.id, "{name}");

        assert!(storage.revoke_session(&session.token).await.unwrap(), "{name}");
        assert!(
            !storage.revoke_session(&session.token).await.unwrap(),
            "{name}: double revoke returns false"
        );
        assert!(
            storage
                .resolve_session(&session.token, None)
                .await
                .unwrap()
                .is_none(),
            "{name}: revoked tokens stop resolving"
        );

        assert!(
            storage
                .resolve_session("definitely-not-a-token", None)
                .await
                .unwrap()
                .is_none(),
            "{name}"
        );
    }
}

#[tokio::test]
async fn expired_sessions_do_not_resolve_and_get_purged() {
    for (name, storage) in backends().await {
        let user = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();

        let expired = storage.create_session(user.id, 0).await.unwrap();
        let live = storage.create_session(user.id, 60).await.unwrap();

        assert!(
            storage
                .resolve_session(&expired.token, None)
                .await
                .unwrap()
                .is_none(),
            "{name}"
        );

        let purged = storage.purge_expired_sessions().await.unwrap();
        assert_eq!(purged, 1, "{name}");
        assert!(
            storage
                .resolve_session(&live.token, None)
                .await
                .unwrap()
                .is_some(),
            "{name}: live sessions survive the purge"
        );
    }
}

#[tokio::test]
async fn sliding_resolution_extends_expiry() {
    for (name, storage) in backends().await {
        let user = storage
            .create_user(new_user("alice", Role::Student))
            .await
            .unwrap();

        let session = storage.create_session(user.id, 5).await.unwrap();
        let extended = storage
            .resolve_session(&session.token, Some(120))
            .await
            .unwrap()
            .unwrap();
        assert!(
            extended.expires_at > session.expires_at,
            "{name}: expiry must move forward"
        );

        let fixed = storage
            .resolve_session(&session.token, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            fixed.expires_at, extended.expires_at,
            "{name}: plain resolution leaves expiry alone"
        );
    }
}
