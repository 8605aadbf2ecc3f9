//! The access-layer contract shared by both storage backends.
//!
//! Every read or mutation the API performs goes through the [`Storage`]
//! trait. [`MemoryStorage`] keeps everything in process-local maps and is
//! volatile by design; [`DatabaseStorage`] persists through SeaORM. The two
//! must stay behaviorally identical — `tests/storage_contract.rs` runs the
//! same suite against both.

pub mod database;
pub mod memory;

pub use database::DatabaseStorage;
pub use memory::MemoryStorage;

use crate::models::{
    assignment, event, message, notice, resource, schedule_slot, session, submission, todo, user,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A referenced record does not exist. Never used for plain lookups,
    /// which return `Option` instead.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness rule was violated (currently only usernames).
    #[error("{0}")]
    Conflict(String),

    /// The backing store failed. Distinct from "not found" so callers can
    /// translate it to a 500 instead of a 404.
    #[error("storage backend error: {0}")]
    Backend(#[from] DbErr),
}

pub type StorageResult<T> = Result<T, StorageError>;

// --- Create / patch inputs -------------------------------------------------
//
// Ids are always server-assigned: none of these carry one.

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: user::Role,
    pub student_number: Option<String>,
    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
}

/// Profile fields an admin may change. Username, role and password are
/// deliberately absent: the first two are immutable, the last has its own
/// flow.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub student_number: Option<String>,
    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub course: String,
    pub course_code: String,
    pub due_date: NaiveDate,
    pub status: assignment::Status,
    pub description: Option<String>,
    pub posted_date: NaiveDate,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub course: Option<String>,
    pub course_code: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<assignment::Status>,
    pub description: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub assignment_id: i64,
    pub student_id: i64,
    pub submitted_at: Option<NaiveDate>,
    pub status: submission::Status,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

/// Equality filters for submission listings; `None` means "any".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionFilter {
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub course_code: Option<String>,
    pub category: String,
    pub file_type: String,
    pub file_size: Option<String>,
    pub file_url: String,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub category: String,
    pub posted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewScheduleSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub course: String,
    pub course_code: String,
    pub room: Option<String>,
    pub building: Option<String>,
    pub slot_type: String,
    pub status: schedule_slot::Status,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleSlotPatch {
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub course: Option<String>,
    pub course_code: Option<String>,
    pub room: Option<String>,
    pub building: Option<String>,
    pub slot_type: Option<String>,
    pub status: Option<schedule_slot::Status>,
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub user_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: i64,
    /// `None` marks a broadcast visible to every user.
    pub recipient_id: Option<i64>,
    pub content: String,
}

// --- The contract ----------------------------------------------------------

/// Typed CRUD over the nine entity kinds plus the session directory.
///
/// Semantics shared by all implementations:
/// - `create` assigns a fresh id and returns the stored record;
/// - `update` merges the patch and returns `None` for an unknown id, never
///   creating a record;
/// - `delete` reports whether a record existed, so a second call on the same
///   id returns `false`;
/// - listings are newest-first by their natural timestamp column where one
///   exists, insertion order otherwise;
/// - weak user/assignment references are existence-checked on create and
///   reported as [`StorageError::NotFound`].
///
/// Concurrent mutations to the same id are last-write-wins; no version
/// checks are made.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: i64) -> StorageResult<Option<user::Model>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<user::Model>>;
    async fn create_user(&self, input: NewUser) -> StorageResult<user::Model>;
    async fn list_users(&self, role: Option<user::Role>) -> StorageResult<Vec<user::Model>>;
    async fn update_user(&self, id: i64, patch: UserPatch) -> StorageResult<Option<user::Model>>;

    // Assignments
    async fn list_assignments(&self) -> StorageResult<Vec<assignment::Model>>;
    async fn get_assignment(&self, id: i64) -> StorageResult<Option<assignment::Model>>;
    async fn create_assignment(&self, input: NewAssignment) -> StorageResult<assignment::Model>;
    async fn update_assignment(
        &self,
        id: i64,
        patch: AssignmentPatch,
    ) -> StorageResult<Option<assignment::Model>>;
    async fn delete_assignment(&self, id: i64) -> StorageResult<bool>;

    // Submissions
    async fn list_submissions(
        &self,
        filter: SubmissionFilter,
    ) -> StorageResult<Vec<submission::Model>>;
    async fn create_submission(&self, input: NewSubmission) -> StorageResult<submission::Model>;

    // Resources
    async fn list_resources(&self, category: Option<&str>) -> StorageResult<Vec<resource::Model>>;
    async fn get_resource(&self, id: i64) -> StorageResult<Option<resource::Model>>;
    async fn create_resource(&self, input: NewResource) -> StorageResult<resource::Model>;
    async fn delete_resource(&self, id: i64) -> StorageResult<bool>;

    // Notices
    async fn list_notices(&self) -> StorageResult<Vec<notice::Model>>;
    async fn get_notice(&self, id: i64) -> StorageResult<Option<notice::Model>>;
    async fn create_notice(&self, input: NewNotice) -> StorageResult<notice::Model>;

    // Schedule
    async fn list_schedule(&self, day: Option<&str>) -> StorageResult<Vec<schedule_slot::Model>>;
    async fn create_schedule_slot(
        &self,
        input: NewScheduleSlot,
    ) -> StorageResult<schedule_slot::Model>;
    async fn update_schedule_slot(
        &self,
        id: i64,
        patch: ScheduleSlotPatch,
    ) -> StorageResult<Option<schedule_slot::Model>>;

    // Todos
    async fn list_todos(&self, user_id: i64) -> StorageResult<Vec<todo::Model>>;
    async fn get_todo(&self, id: i64) -> StorageResult<Option<todo::Model>>;
    async fn create_todo(&self, input: NewTodo) -> StorageResult<todo::Model>;
    async fn update_todo(&self, id: i64, patch: TodoPatch) -> StorageResult<Option<todo::Model>>;
    async fn delete_todo(&self, id: i64) -> StorageResult<bool>;

    // Events
    async fn list_events(&self) -> StorageResult<Vec<event::Model>>;
    async fn create_event(&self, input: NewEvent) -> StorageResult<event::Model>;

    // Messages
    async fn list_messages_for(&self, user_id: i64) -> StorageResult<Vec<message::Model>>;
    async fn get_message(&self, id: i64) -> StorageResult<Option<message::Model>>;
    async fn create_message(&self, input: NewMessage) -> StorageResult<message::Model>;
    async fn mark_message_read(&self, id: i64) -> StorageResult<Option<message::Model>>;

    // Session directory
    async fn create_session(&self, user_id: i64, ttl_minutes: i64)
    -> StorageResult<session::Model>;
    /// Resolves a token to its live session, or `None` when the token is
    /// unknown, revoked or expired. `extend_minutes` pushes the expiry out
    /// from now (sliding sessions); `None` leaves the expiry fixed.
    async fn resolve_session(
        &self,
        token: &str,
        extend_minutes: Option<i64>,
    ) -> StorageResult<Option<session::Model>>;
    /// Returns `true` iff an unrevoked session existed for the token.
    async fn revoke_session(&self, token: &str) -> StorageResult<bool>;
    /// Drops expired and revoked sessions; returns how many were removed.
    async fn purge_expired_sessions(&self) -> StorageResult<u64>;
}
