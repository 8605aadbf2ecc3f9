//! Request DTOs for the `/events` route group.

use chrono::NaiveDate;
use db::storage::NewEvent;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be empty"))]
    pub title: String,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 64, message = "Category must not be empty"))]
    pub category: String,

    pub description: Option<String>,
}

impl CreateEventRequest {
    pub fn into_input(self) -> NewEvent {
        NewEvent {
            title: self.title,
            date: self.date,
            category: self.category,
            description: self.description,
        }
    }
}
