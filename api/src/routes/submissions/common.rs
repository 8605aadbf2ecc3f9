//! Request DTOs for the `/submissions` route group.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct SubmissionListQuery {
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,

    /// Defaults to today when omitted.
    pub submitted_at: Option<NaiveDate>,
}
