//! Volatile in-process backend.
//!
//! Everything lives in plain maps behind one `RwLock`; ids are handed out by
//! per-table counters. Suitable for demos and tests, and intentionally lost
//! on restart — sessions included.

use super::{
    AssignmentPatch, NewAssignment, NewEvent, NewMessage, NewNotice, NewResource,
    NewScheduleSlot, NewSubmission, NewTodo, NewUser, ScheduleSlotPatch, Storage, StorageError,
    StorageResult, SubmissionFilter, TodoPatch, UserPatch,
};
use crate::models::{
    assignment, event, message, notice, resource, schedule_slot, session, submission, todo, user,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: HashMap<i64, user::Model>,
    assignments: HashMap<i64, assignment::Model>,
    submissions: HashMap<i64, submission::Model>,
    resources: HashMap<i64, resource::Model>,
    notices: HashMap<i64, notice::Model>,
    schedule_slots: HashMap<i64, schedule_slot::Model>,
    todos: HashMap<i64, todo::Model>,
    events: HashMap<i64, event::Model>,
    messages: HashMap<i64, message::Model>,
    /// Keyed by token: that is the only way sessions are ever looked up.
    sessions: HashMap<String, session::Model>,

    next_user_id: i64,
    next_assignment_id: i64,
    next_submission_id: i64,
    next_resource_id: i64,
    next_notice_id: i64,
    next_schedule_slot_id: i64,
    next_todo_id: i64,
    next_event_id: i64,
    next_message_id: i64,
    next_session_id: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        self.inner.read().expect("memory storage lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.inner.write().expect("memory storage lock poisoned")
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // --- Users ---

    async fn get_user(&self, id: i64) -> StorageResult<Option<user::Model>> {
        Ok(self.read().users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<user::Model>> {
        Ok(self
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, input: NewUser) -> StorageResult<user::Model> {
        let password_hash = user::hash_password(&input.password)
            .map_err(|e| StorageError::Backend(DbErr::Custom(format!("password hash: {e}"))))?;

        let mut tables = self.write();
        if tables.users.values().any(|u| u.username == input.username) {
            return Err(StorageError::Conflict(format!(
                "A user with username '{}' already exists",
                input.username
            )));
        }

        let now = Utc::now();
        let id = next(&mut tables.next_user_id);
        let model = user::Model {
            id,
            username: input.username,
            password_hash,
            full_name: input.full_name,
            role: input.role,
            student_number: input.student_number,
            section: input.section,
            department: input.department,
            year: input.year,
            semester: input.semester,
            cgpa: input.cgpa,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(id, model.clone());
        Ok(model)
    }

    async fn list_users(&self, role: Option<user::Role>) -> StorageResult<Vec<user::Model>> {
        let tables = self.read();
        let mut users: Vec<_> = tables
            .users
            .values()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> StorageResult<Option<user::Model>> {
        let mut tables = self.write();
        let Some(existing) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(full_name) = patch.full_name {
            existing.full_name = full_name;
        }
        if let Some(student_number) = patch.student_number {
            existing.student_number = Some(student_number);
        }
        if let Some(section) = patch.section {
            existing.section = Some(section);
        }
        if let Some(department) = patch.department {
            existing.department = Some(department);
        }
        if let Some(year) = patch.year {
            existing.year = Some(year);
        }
        if let Some(semester) = patch.semester {
            existing.semester = Some(semester);
        }
        if let Some(cgpa) = patch.cgpa {
            existing.cgpa = Some(cgpa);
        }
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    // --- Assignments ---

    async fn list_assignments(&self) -> StorageResult<Vec<assignment::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables.assignments.values().cloned().collect();
        items.sort_by(|a, b| (b.posted_date, b.id).cmp(&(a.posted_date, a.id)));
        Ok(items)
    }

    async fn get_assignment(&self, id: i64) -> StorageResult<Option<assignment::Model>> {
        Ok(self.read().assignments.get(&id).cloned())
    }

    async fn create_assignment(&self, input: NewAssignment) -> StorageResult<assignment::Model> {
        let mut tables = self.write();
        let id = next(&mut tables.next_assignment_id);
        let model = assignment::Model {
            id,
            title: input.title,
            course: input.course,
            course_code: input.course_code,
            due_date: input.due_date,
            status: input.status,
            description: input.description,
            posted_date: input.posted_date,
            file_url: input.file_url,
        };
        tables.assignments.insert(id, model.clone());
        Ok(model)
    }

    async fn update_assignment(
        &self,
        id: i64,
        patch: AssignmentPatch,
    ) -> StorageResult<Option<assignment::Model>> {
        let mut tables = self.write();
        let Some(existing) = tables.assignments.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            existing.title = title;
        }
        if let Some(course) = patch.course {
            existing.course = course;
        }
        if let Some(course_code) = patch.course_code {
            existing.course_code = course_code;
        }
        if let Some(due_date) = patch.due_date {
            existing.due_date = due_date;
        }
        if let Some(status) = patch.status {
            existing.status = status;
        }
        if let Some(description) = patch.description {
            existing.description = Some(description);
        }
        if let Some(file_url) = patch.file_url {
            existing.file_url = Some(file_url);
        }
        Ok(Some(existing.clone()))
    }

    async fn delete_assignment(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write().assignments.remove(&id).is_some())
    }

    // --- Submissions ---

    async fn list_submissions(
        &self,
        filter: SubmissionFilter,
    ) -> StorageResult<Vec<submission::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables
            .submissions
            .values()
            .filter(|s| filter.assignment_id.is_none_or(|a| s.assignment_id == a))
            .filter(|s| filter.student_id.is_none_or(|u| s.student_id == u))
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn create_submission(&self, input: NewSubmission) -> StorageResult<submission::Model> {
        let mut tables = self.write();
        if !tables.assignments.contains_key(&input.assignment_id) {
            return Err(StorageError::NotFound("Assignment"));
        }
        if !tables.users.contains_key(&input.student_id) {
            return Err(StorageError::NotFound("Student"));
        }
        let id = next(&mut tables.next_submission_id);
        let model = submission::Model {
            id,
            assignment_id: input.assignment_id,
            student_id: input.student_id,
            submitted_at: input.submitted_at,
            status: input.status,
            grade: input.grade,
            feedback: input.feedback,
        };
        tables.submissions.insert(id, model.clone());
        Ok(model)
    }

    // --- Resources ---

    async fn list_resources(&self, category: Option<&str>) -> StorageResult<Vec<resource::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables
            .resources
            .values()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .cloned()
            .collect();
        items.sort_by(|a, b| (b.upload_date, b.id).cmp(&(a.upload_date, a.id)));
        Ok(items)
    }

    async fn get_resource(&self, id: i64) -> StorageResult<Option<resource::Model>> {
        Ok(self.read().resources.get(&id).cloned())
    }

    async fn create_resource(&self, input: NewResource) -> StorageResult<resource::Model> {
        let mut tables = self.write();
        let id = next(&mut tables.next_resource_id);
        let model = resource::Model {
            id,
            title: input.title,
            course_code: input.course_code,
            category: input.category,
            file_type: input.file_type,
            file_size: input.file_size,
            file_url: input.file_url,
            upload_date: input.upload_date,
        };
        tables.resources.insert(id, model.clone());
        Ok(model)
    }

    async fn delete_resource(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write().resources.remove(&id).is_some())
    }

    // --- Notices ---

    async fn list_notices(&self) -> StorageResult<Vec<notice::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables.notices.values().cloned().collect();
        items.sort_by(|a, b| (b.posted_at, b.id).cmp(&(a.posted_at, a.id)));
        Ok(items)
    }

    async fn get_notice(&self, id: i64) -> StorageResult<Option<notice::Model>> {
        Ok(self.read().notices.get(&id).cloned())
    }

    async fn create_notice(&self, input: NewNotice) -> StorageResult<notice::Model> {
        let mut tables = self.write();
        let id = next(&mut tables.next_notice_id);
        let model = notice::Model {
            id,
            title: input.title,
            content: input.content,
            category: input.category,
            posted_at: input.posted_at,
            expires_at: input.expires_at,
        };
        tables.notices.insert(id, model.clone());
        Ok(model)
    }

    // --- Schedule ---

    async fn list_schedule(&self, day: Option<&str>) -> StorageResult<Vec<schedule_slot::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables
            .schedule_slots
            .values()
            .filter(|s| day.is_none_or(|d| s.day == d))
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn create_schedule_slot(
        &self,
        input: NewScheduleSlot,
    ) -> StorageResult<schedule_slot::Model> {
        let mut tables = self.write();
        let id = next(&mut tables.next_schedule_slot_id);
        let model = schedule_slot::Model {
            id,
            day: input.day,
            start_time: input.start_time,
            end_time: input.end_time,
            course: input.course,
            course_code: input.course_code,
            room: input.room,
            building: input.building,
            slot_type: input.slot_type,
            status: input.status,
        };
        tables.schedule_slots.insert(id, model.clone());
        Ok(model)
    }

    async fn update_schedule_slot(
        &self,
        id: i64,
        patch: ScheduleSlotPatch,
    ) -> StorageResult<Option<schedule_slot::Model>> {
        let mut tables = self.write();
        let Some(existing) = tables.schedule_slots.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(day) = patch.day {
            existing.day = day;
        }
        if let Some(start_time) = patch.start_time {
            existing.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            existing.end_time = end_time;
        }
        if let Some(course) = patch.course {
            existing.course = course;
        }
        if let Some(course_code) = patch.course_code {
            existing.course_code = course_code;
        }
        if let Some(room) = patch.room {
            existing.room = Some(room);
        }
        if let Some(building) = patch.building {
            existing.building = Some(building);
        }
        if let Some(slot_type) = patch.slot_type {
            existing.slot_type = slot_type;
        }
        if let Some(status) = patch.status {
            existing.status = status;
        }
        Ok(Some(existing.clone()))
    }

    // --- Todos ---

    async fn list_todos(&self, user_id: i64) -> StorageResult<Vec<todo::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables
            .todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(items)
    }

    async fn get_todo(&self, id: i64) -> StorageResult<Option<todo::Model>> {
        Ok(self.read().todos.get(&id).cloned())
    }

    async fn create_todo(&self, input: NewTodo) -> StorageResult<todo::Model> {
        let mut tables = self.write();
        if !tables.users.contains_key(&input.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        let id = next(&mut tables.next_todo_id);
        let model = todo::Model {
            id,
            user_id: input.user_id,
            text: input.text,
            completed: false,
            created_at: Utc::now(),
        };
        tables.todos.insert(id, model.clone());
        Ok(model)
    }

    async fn update_todo(&self, id: i64, patch: TodoPatch) -> StorageResult<Option<todo::Model>> {
        let mut tables = self.write();
        let Some(existing) = tables.todos.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(text) = patch.text {
            existing.text = text;
        }
        if let Some(completed) = patch.completed {
            existing.completed = completed;
        }
        Ok(Some(existing.clone()))
    }

    async fn delete_todo(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write().todos.remove(&id).is_some())
    }

    // --- Events ---

    async fn list_events(&self) -> StorageResult<Vec<event::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables.events.values().cloned().collect();
        items.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(items)
    }

    async fn create_event(&self, input: NewEvent) -> StorageResult<event::Model> {
        let mut tables = self.write();
        let id = next(&mut tables.next_event_id);
        let model = event::Model {
            id,
            title: input.title,
            date: input.date,
            category: input.category,
            description: input.description,
        };
        tables.events.insert(id, model.clone());
        Ok(model)
    }

    // --- Messages ---

    async fn list_messages_for(&self, user_id: i64) -> StorageResult<Vec<message::Model>> {
        let tables = self.read();
        let mut items: Vec<_> = tables
            .messages
            .values()
            .filter(|m| {
                m.sender_id == user_id
                    || m.recipient_id == Some(user_id)
                    || m.recipient_id.is_none()
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| (b.sent_at, b.id).cmp(&(a.sent_at, a.id)));
        Ok(items)
    }

    async fn get_message(&self, id: i64) -> StorageResult<Option<message::Model>> {
        Ok(self.read().messages.get(&id).cloned())
    }

    async fn create_message(&self, input: NewMessage) -> StorageResult<message::Model> {
        let mut tables = self.write();
        if !tables.users.contains_key(&input.sender_id) {
            return Err(StorageError::NotFound("Sender"));
        }
        if let Some(recipient_id) = input.recipient_id {
            if !tables.users.contains_key(&recipient_id) {
                return Err(StorageError::NotFound("Recipient"));
            }
        }
        let id = next(&mut tables.next_message_id);
        let model = message::Model {
            id,
            sender_id: input.sender_id,
            recipient_id: input.recipient_id,
            content: input.content,
            sent_at: Utc::now(),
            read: false,
        };
        tables.messages.insert(id, model.clone());
        Ok(model)
    }

    async fn mark_message_read(&self, id: i64) -> StorageResult<Option<message::Model>> {
        let mut tables = self.write();
        let Some(existing) = tables.messages.get_mut(&id) else {
            return Ok(None);
        };
        existing.read = true;
        Ok(Some(existing.clone()))
    }

    // --- Session directory ---

    async fn create_session(
        &self,
        user_id: i64,
        ttl_minutes: i64,
    ) -> StorageResult<session::Model> {
        let mut tables = self.write();
        if !tables.users.contains_key(&user_id) {
            return Err(StorageError::NotFound("User"));
        }
        let mut model = session::Model::issue(user_id, ttl_minutes);
        model.id = next(&mut tables.next_session_id);
        tables.sessions.insert(model.token.clone(), model.clone());
        Ok(model)
    }

    async fn resolve_session(
        &self,
        token: &str,
        extend_minutes: Option<i64>,
    ) -> StorageResult<Option<session::Model>> {
        let now = Utc::now();
        let mut tables = self.write();
        let Some(existing) = tables.sessions.get_mut(token) else {
            return Ok(None);
        };
        if !existing.is_active(now) {
            return Ok(None);
        }
        if let Some(minutes) = extend_minutes {
            existing.expires_at = now + Duration::minutes(minutes);
        }
        Ok(Some(existing.clone()))
    }

    async fn revoke_session(&self, token: &str) -> StorageResult<bool> {
        let mut tables = self.write();
        match tables.sessions.get_mut(token) {
            Some(existing) if !existing.revoked => {
                existing.revoked = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn purge_expired_sessions(&self) -> StorageResult<u64> {
        let now = Utc::now();
        let mut tables = self.write();
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| s.is_active(now));
        Ok((before - tables.sessions.len()) as u64)
    }
}
