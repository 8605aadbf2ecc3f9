//! Request DTOs for the `/admin` roster surface.

use crate::routes::auth::common::USERNAME_REGEX;
use db::models::user::Role;
use db::storage::{NewUser, UserPatch};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username must be 3-32 characters (letters, digits, '.', '_' or '-')"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "Full name must not be empty"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 32, message = "Student number must not be empty"))]
    pub student_number: String,

    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
}

impl CreateStudentRequest {
    pub fn into_input(self) -> NewUser {
        NewUser {
            username: self.username,
            password: self.password,
            full_name: self.full_name,
            role: Role::Student,
            student_number: Some(self.student_number),
            section: self.section,
            department: self.department,
            year: self.year,
            semester: self.semester,
            cgpa: self.cgpa,
        }
    }
}

/// Profile-only patch: there is intentionally no way to change username,
/// role or password here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 120, message = "Full name must not be empty"))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Student number must not be empty"))]
    pub student_number: Option<String>,

    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
}

impl UpdateStudentRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            full_name: self.full_name,
            student_number: self.student_number,
            section: self.section,
            department: self.department,
            year: self.year,
            semester: self.semester,
            cgpa: self.cgpa,
        }
    }
}
