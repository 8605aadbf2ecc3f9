//! Request DTOs for the `/todos` route group.

use db::storage::TodoPatch;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 500, message = "Todo text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 500, message = "Todo text must not be empty"))]
    pub text: Option<String>,

    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            text: self.text,
            completed: self.completed,
        }
    }
}
