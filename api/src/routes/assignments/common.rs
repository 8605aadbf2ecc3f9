//! Request DTOs for the `/assignments` route group.

use chrono::{NaiveDate, Utc};
use db::models::assignment::Status;
use db::storage::{AssignmentPatch, NewAssignment};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, max = 120, message = "Course must not be empty"))]
    pub course: String,

    #[validate(length(min = 1, max = 32, message = "Course code must not be empty"))]
    pub course_code: String,

    pub due_date: NaiveDate,

    /// Defaults to `pending` when omitted.
    pub status: Option<Status>,

    pub description: Option<String>,

    /// Defaults to today when omitted.
    pub posted_date: Option<NaiveDate>,

    pub file_url: Option<String>,
}

impl CreateAssignmentRequest {
    pub fn into_input(self) -> NewAssignment {
        NewAssignment {
            title: self.title,
            course: self.course,
            course_code: self.course_code,
            due_date: self.due_date,
            status: self.status.unwrap_or(Status::Pending),
            description: self.description,
            posted_date: self.posted_date.unwrap_or_else(|| Utc::now().date_naive()),
            file_url: self.file_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssignmentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 120, message = "Course must not be empty"))]
    pub course: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Course code must not be empty"))]
    pub course_code: Option<String>,

    pub due_date: Option<NaiveDate>,
    pub status: Option<Status>,
    pub description: Option<String>,
    pub file_url: Option<String>,
}

impl UpdateAssignmentRequest {
    pub fn into_patch(self) -> AssignmentPatch {
        AssignmentPatch {
            title: self.title,
            course: self.course,
            course_code: self.course_code,
            due_date: self.due_date,
            status: self.status,
            description: self.description,
            file_url: self.file_url,
        }
    }
}
