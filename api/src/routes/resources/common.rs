//! Request DTOs for the `/resources` route group.

use chrono::{NaiveDate, Utc};
use db::storage::NewResource;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ResourceListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    pub course_code: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Category must not be empty"))]
    pub category: String,

    #[validate(length(min = 1, max = 16, message = "File type must not be empty"))]
    pub file_type: String,

    pub file_size: Option<String>,

    #[validate(length(min = 1, message = "File URL must not be empty"))]
    pub file_url: String,

    /// Defaults to today when omitted.
    pub upload_date: Option<NaiveDate>,
}

impl CreateResourceRequest {
    pub fn into_input(self) -> NewResource {
        NewResource {
            title: self.title,
            course_code: self.course_code,
            category: self.category,
            file_type: self.file_type,
            file_size: self.file_size,
            file_url: self.file_url,
            upload_date: self.upload_date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}
