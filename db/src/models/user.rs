use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a portal account in the `users` table.
///
/// Covers both students and admins; the student-specific columns stay `NULL`
/// for admin accounts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Securely hashed password string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Account role. Immutable after creation.
    pub role: Role,
    pub student_number: Option<String>,
    pub section: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub cgpa: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account role stored as text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    sea_orm::strum::Display,
    sea_orm::strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// Users are referenced by sessions, todos, submissions and messages; those
/// entities declare the `belongs_to` side.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Hashes a plaintext password with argon2 and a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(plain.as_bytes(), &salt)?
        .to_string())
}

impl Model {
    /// Verifies a plaintext password against the stored hash.
    ///
    /// An unparseable stored hash counts as a failed verification rather
    /// than an error, so corrupted rows cannot be logged into.
    pub fn verify_password(&self, plain: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
