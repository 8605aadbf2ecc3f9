//! Request DTOs for the `/schedule` route group.

use db::models::schedule_slot::Status;
use db::storage::{NewScheduleSlot, ScheduleSlotPatch};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ScheduleListQuery {
    pub day: Option<String>,
}

lazy_static::lazy_static! {
    pub static ref TIME_REGEX: regex::Regex = regex::Regex::new("^\\d{2}:\\d{2}$").unwrap();
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleSlotRequest {
    #[validate(length(min = 1, max = 16, message = "Day must not be empty"))]
    pub day: String,

    #[validate(regex(path = *TIME_REGEX, message = "Start time must be HH:MM"))]
    pub start_time: String,

    #[validate(regex(path = *TIME_REGEX, message = "End time must be HH:MM"))]
    pub end_time: String,

    #[validate(length(min = 1, max = 120, message = "Course must not be empty"))]
    pub course: String,

    #[validate(length(min = 1, max = 32, message = "Course code must not be empty"))]
    pub course_code: String,

    pub room: Option<String>,
    pub building: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Slot type must not be empty"))]
    pub slot_type: String,

    /// Defaults to `Active` when omitted.
    pub status: Option<Status>,
}

impl CreateScheduleSlotRequest {
    pub fn into_input(self) -> NewScheduleSlot {
        NewScheduleSlot {
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            course: self.course,
            course_code: self.course_code,
            room: self.room,
            building: self.building,
            slot_type: self.slot_type,
            status: self.status.unwrap_or(Status::Active),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateScheduleSlotRequest {
    #[validate(length(min = 1, max = 16, message = "Day must not be empty"))]
    pub day: Option<String>,

    #[validate(regex(path = *TIME_REGEX, message = "Start time must be HH:MM"))]
    pub start_time: Option<String>,

    #[validate(regex(path = *TIME_REGEX, message = "End time must be HH:MM"))]
    pub end_time: Option<String>,

    #[validate(length(min = 1, max = 120, message = "Course must not be empty"))]
    pub course: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Course code must not be empty"))]
    pub course_code: Option<String>,

    pub room: Option<String>,
    pub building: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Slot type must not be empty"))]
    pub slot_type: Option<String>,

    pub status: Option<Status>,
}

impl UpdateScheduleSlotRequest {
    pub fn into_patch(self) -> ScheduleSlotPatch {
        ScheduleSlotPatch {
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            course: self.course,
            course_code: self.course_code,
            room: self.room,
            building: self.building,
            slot_type: self.slot_type,
            status: self.status,
        }
    }
}
