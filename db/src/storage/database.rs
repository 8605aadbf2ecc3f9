//! SeaORM-backed persistent storage.
//!
//! Holds a cloned `DatabaseConnection` (SeaORM connections are handles over
//! a pool). Row-level locking and durability come from the database; this
//! layer only translates the [`Storage`] contract into queries.

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
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn user_exists(&self, id: i64) -> StorageResult<bool> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    // --- Users ---

    async fn get_user(&self, id: i64) -> StorageResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn create_user(&self, input: NewUser) -> StorageResult<user::Model> {
        if self.get_user_by_username(&input.username).await?.is_some() {
            return Err(StorageError::Conflict(format!(
                "A user with username '{}' already exists",
                input.username
            )));
        }

        let password_hash = user::hash_password(&input.password)
            .map_err(|e| StorageError::Backend(DbErr::Custom(format!("password hash: {e}"))))?;

        let now = Utc::now();
        let model = user::ActiveModel {
            id: NotSet,
            username: Set(input.username),
            password_hash: Set(password_hash),
            full_name: Set(input.full_name),
            role: Set(input.role),
            student_number: Set(input.student_number),
            section: Set(input.section),
            department: Set(input.department),
            year: Set(input.year),
            semester: Set(input.semester),
            cgpa: Set(input.cgpa),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn list_users(&self, role: Option<user::Role>) -> StorageResult<Vec<user::Model>> {
        let mut query = user::Entity::find().order_by_asc(user::Column::Id);
        if let Some(role) = role {
            query = query.filter(user::Column::Role.eq(role));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> StorageResult<Option<user::Model>> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active = existing.into_active_model();
        if let Some(full_name) = patch.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(student_number) = patch.student_number {
            active.student_number = Set(Some(student_number));
        }
        if let Some(section) = patch.section {
            active.section = Set(Some(section));
        }
        if let Some(department) = patch.department {
            active.department = Set(Some(department));
        }
        if let Some(year) = patch.year {
            active.year = Set(Some(year));
        }
        if let Some(semester) = patch.semester {
            active.semester = Set(Some(semester));
        }
        if let Some(cgpa) = patch.cgpa {
            active.cgpa = Set(Some(cgpa));
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&self.db).await?))
    }

    // --- Assignments ---

    async fn list_assignments(&self) -> StorageResult<Vec<assignment::Model>> {
        Ok(assignment::Entity::find()
            .order_by_desc(assignment::Column::PostedDate)
            .order_by_desc(assignment::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_assignment(&self, id: i64) -> StorageResult<Option<assignment::Model>> {
        Ok(assignment::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_assignment(&self, input: NewAssignment) -> StorageResult<assignment::Model> {
        let model = assignment::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            course: Set(input.course),
            course_code: Set(input.course_code),
            due_date: Set(input.due_date),
            status: Set(input.status),
            description: Set(input.description),
            posted_date: Set(input.posted_date),
            file_url: Set(input.file_url),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn update_assignment(
        &self,
        id: i64,
        patch: AssignmentPatch,
    ) -> StorageResult<Option<assignment::Model>> {
        let Some(existing) = assignment::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active = existing.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(course) = patch.course {
            active.course = Set(course);
        }
        if let Some(course_code) = patch.course_code {
            active.course_code = Set(course_code);
        }
        if let Some(due_date) = patch.due_date {
            active.due_date = Set(due_date);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(file_url) = patch.file_url {
            active.file_url = Set(Some(file_url));
        }
        Ok(Some(active.update(&self.db).await?))
    }

    async fn delete_assignment(&self, id: i64) -> StorageResult<bool> {
        let res = assignment::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    // --- Submissions ---

    async fn list_submissions(
        &self,
        filter: SubmissionFilter,
    ) -> StorageResult<Vec<submission::Model>> {
        let mut query = submission::Entity::find().order_by_asc(submission::Column::Id);
        if let Some(assignment_id) = filter.assignment_id {
            query = query.filter(submission::Column::AssignmentId.eq(assignment_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(submission::Column::StudentId.eq(student_id));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn create_submission(&self, input: NewSubmission) -> StorageResult<submission::Model> {
        if self.get_assignment(input.assignment_id).await?.is_none() {
            return Err(StorageError::NotFound("Assignment"));
        }
        if !self.user_exists(input.student_id).await? {
            return Err(StorageError::NotFound("Student"));
        }
        let model = submission::ActiveModel {
            id: NotSet,
            assignment_id: Set(input.assignment_id),
            student_id: Set(input.student_id),
            submitted_at: Set(input.submitted_at),
            status: Set(input.status),
            grade: Set(input.grade),
            feedback: Set(input.feedback),
        };
        Ok(model.insert(&self.db).await?)
    }

    // --- Resources ---

    async fn list_resources(&self, category: Option<&str>) -> StorageResult<Vec<resource::Model>> {
        let mut query = resource::Entity::find()
            .order_by_desc(resource::Column::UploadDate)
            .order_by_desc(resource::Column::Id);
        if let Some(category) = category {
            query = query.filter(resource::Column::Category.eq(category));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get_resource(&self, id: i64) -> StorageResult<Option<resource::Model>> {
        Ok(resource::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_resource(&self, input: NewResource) -> StorageResult<resource::Model> {
        let model = resource::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            course_code: Set(input.course_code),
            category: Set(input.category),
            file_type: Set(input.file_type),
            file_size: Set(input.file_size),
            file_url: Set(input.file_url),
            upload_date: Set(input.upload_date),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn delete_resource(&self, id: i64) -> StorageResult<bool> {
        let res = resource::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    // --- Notices ---

    async fn list_notices(&self) -> StorageResult<Vec<notice::Model>> {
        Ok(notice::Entity::find()
            .order_by_desc(notice::Column::PostedAt)
            .order_by_desc(notice::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_notice(&self, id: i64) -> StorageResult<Option<notice::Model>> {
        Ok(notice::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_notice(&self, input: NewNotice) -> StorageResult<notice::Model> {
        let model = notice::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            content: Set(input.content),
            category: Set(input.category),
            posted_at: Set(input.posted_at),
            expires_at: Set(input.expires_at),
        };
        Ok(model.insert(&self.db).await?)
    }

    // --- Schedule ---

    async fn list_schedule(&self, day: Option<&str>) -> StorageResult<Vec<schedule_slot::Model>> {
        let mut query = schedule_slot::Entity::find().order_by_asc(schedule_slot::Column::Id);
        if let Some(day) = day {
            query = query.filter(schedule_slot::Column::Day.eq(day));
        }
        Ok(query.all(&self.db).await?)
    }

    async fn create_schedule_slot(
        &self,
        input: NewScheduleSlot,
    ) -> StorageResult<schedule_slot::Model> {
        let model = schedule_slot::ActiveModel {
            id: NotSet,
            day: Set(input.day),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
            course: Set(input.course),
            course_code: Set(input.course_code),
            room: Set(input.room),
            building: Set(input.building),
            slot_type: Set(input.slot_type),
            status: Set(input.status),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn update_schedule_slot(
        &self,
        id: i64,
        patch: ScheduleSlotPatch,
    ) -> StorageResult<Option<schedule_slot::Model>> {
        let Some(existing) = schedule_slot::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active = existing.into_active_model();
        if let Some(day) = patch.day {
            active.day = Set(day);
        }
        if let Some(start_time) = patch.start_time {
            active.start_time = Set(start_time);
        }
        if let Some(end_time) = patch.end_time {
            active.end_time = Set(end_time);
        }
        if let Some(course) = patch.course {
            active.course = Set(course);
        }
        if let Some(course_code) = patch.course_code {
            active.course_code = Set(course_code);
        }
        if let Some(room) = patch.room {
            active.room = Set(Some(room));
        }
        if let Some(building) = patch.building {
            active.building = Set(Some(building));
        }
        if let Some(slot_type) = patch.slot_type {
            active.slot_type = Set(slot_type);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        Ok(Some(active.update(&self.db).await?))
    }

    // --- Todos ---

    async fn list_todos(&self, user_id: i64) -> StorageResult<Vec<todo::Model>> {
        Ok(todo::Entity::find()
            .filter(todo::Column::UserId.eq(user_id))
            .order_by_desc(todo::Column::CreatedAt)
            .order_by_desc(todo::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_todo(&self, id: i64) -> StorageResult<Option<todo::Model>> {
        Ok(todo::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_todo(&self, input: NewTodo) -> StorageResult<todo::Model> {
        if !self.user_exists(input.user_id).await? {
            return Err(StorageError::NotFound("User"));
        }
        let model = todo::ActiveModel {
            id: NotSet,
            user_id: Set(input.user_id),
            text: Set(input.text),
            completed: Set(false),
            created_at: Set(Utc::now()),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn update_todo(&self, id: i64, patch: TodoPatch) -> StorageResult<Option<todo::Model>> {
        let Some(existing) = todo::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active = existing.into_active_model();
        if let Some(text) = patch.text {
            active.text = Set(text);
        }
        if let Some(completed) = patch.completed {
            active.completed = Set(completed);
        }
        Ok(Some(active.update(&self.db).await?))
    }

    async fn delete_todo(&self, id: i64) -> StorageResult<bool> {
        let res = todo::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    // --- Events ---

    async fn list_events(&self) -> StorageResult<Vec<event::Model>> {
        Ok(event::Entity::find()
            .order_by_desc(event::Column::Date)
            .order_by_desc(event::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create_event(&self, input: NewEvent) -> StorageResult<event::Model> {
        let model = event::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            date: Set(input.date),
            category: Set(input.category),
            description: Set(input.description),
        };
        Ok(model.insert(&self.db).await?)
    }

    // --- Messages ---

    async fn list_messages_for(&self, user_id: i64) -> StorageResult<Vec<message::Model>> {
        Ok(message::Entity::find()
            .filter(
                Condition::any()
                    .add(message::Column::SenderId.eq(user_id))
                    .add(message::Column::RecipientId.eq(user_id))
                    .add(message::Column::RecipientId.is_null()),
            )
            .order_by_desc(message::Column::SentAt)
            .order_by_desc(message::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_message(&self, id: i64) -> StorageResult<Option<message::Model>> {
        Ok(message::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_message(&self, input: NewMessage) -> StorageResult<message::Model> {
        if !self.user_exists(input.sender_id).await? {
            return Err(StorageError::NotFound("Sender"));
        }
        if let Some(recipient_id) = input.recipient_id {
            if !self.user_exists(recipient_id).await? {
                return Err(StorageError::NotFound("Recipient"));
            }
        }
        let model = message::ActiveModel {
            id: NotSet,
            sender_id: Set(input.sender_id),
            recipient_id: Set(input.recipient_id),
            content: Set(input.content),
            sent_at: Set(Utc::now()),
            read: Set(false),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn mark_message_read(&self, id: i64) -> StorageResult<Option<message::Model>> {
        let Some(existing) = message::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active = existing.into_active_model();
        active.read = Set(true);
        Ok(Some(active.update(&self.db).await?))
    }

    // --- Session directory ---

    async fn create_session(
        &self,
        user_id: i64,
        ttl_minutes: i64,
    ) -> StorageResult<session::Model> {
        if !self.user_exists(user_id).await? {
            return Err(StorageError::NotFound("User"));
        }
        let mut active = session::Model::issue(user_id, ttl_minutes).into_active_model();
        active.id = NotSet;
        Ok(active.insert(&self.db).await?)
    }

    async fn resolve_session(
        &self,
        token: &str,
        extend_minutes: Option<i64>,
    ) -> StorageResult<Option<session::Model>> {
        let now = Utc::now();
        let Some(existing) = session::Entity::find()
            .filter(session::Column::Token.eq(token))
            .filter(session::Column::Revoked.eq(false))
            .filter(session::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        match extend_minutes {
            Some(minutes) => {
                let mut active = existing.into_active_model();
                active.expires_at = Set(now + Duration::minutes(minutes));
                Ok(Some(active.update(&self.db).await?))
            }
            None => Ok(Some(existing)),
        }
    }

    async fn revoke_session(&self, token: &str) -> StorageResult<bool> {
        let Some(existing) = session::Entity::find()
            .filter(session::Column::Token.eq(token))
            .filter(session::Column::Revoked.eq(false))
            .one(&self.db)
            .await?
        else {
            return Ok(false);
        };
        let mut active = existing.into_active_model();
        active.revoked = Set(true);
        active.update(&self.db).await?;
        Ok(true)
    }

    async fn purge_expired_sessions(&self) -> StorageResult<u64> {
        let res = session::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(session::Column::ExpiresAt.lte(Utc::now()))
                    .add(session::Column::Revoked.eq(true)),
            )
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
