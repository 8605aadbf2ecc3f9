//! Request DTOs for the `/notices` route group.

use chrono::{DateTime, Utc};
use db::storage::NewNotice;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[validate(length(min = 1, max = 64, message = "Category must not be empty"))]
    pub category: String,

    /// Stored verbatim; expired notices still list.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateNoticeRequest {
    pub fn into_input(self) -> NewNotice {
        NewNotice {
            title: self.title,
            content: self.content,
            category: self.category,
            posted_at: Utc::now(),
            expires_at: self.expires_at,
        }
    }
}
