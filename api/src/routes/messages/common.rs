//! Request DTOs for the `/messages` route group.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    /// Omit for a broadcast message.
    pub recipient_id: Option<i64>,

    #[validate(length(min = 1, max = 2000, message = "Message content must not be empty"))]
    pub content: String,
}
