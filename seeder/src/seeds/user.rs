use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::Role;
use db::storage::{NewUser, Storage, StorageError};
use fake::Fake;
use fake::faker::name::en::Name;

pub struct UserSeeder;

fn student(username: &str, full_name: String, number: u32) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "student123".to_string(),
        full_name,
        role: Role::Student,
        student_number: Some(format!("2023-1-60-{number:03}")),
        section: Some("B".to_string()),
        department: Some("Computer Science & Engineering".to_string()),
        year: Some(3),
        semester: Some("Fall 2025".to_string()),
        cgpa: Some("3.72".to_string()),
    }
}

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        // Re-running the seeder against an existing database is a no-op for
        // accounts; content seeders append.
        if storage.get_user_by_username("admin").await?.is_some() {
            return Ok(());
        }

        storage
            .create_user(NewUser {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                full_name: "Portal Administrator".to_string(),
                role: Role::Admin,
                student_number: None,
                section: None,
                department: None,
                year: None,
                semester: None,
                cgpa: None,
            })
            .await?;

        storage
            .create_user(student("student", "Arif Hossain".to_string(), 42))
            .await?;

        for n in 1..=5u32 {
            let full_name: String = Name().fake();
            storage
                .create_user(student(&format!("student{n:02}"), full_name, n))
                .await?;
        }

        Ok(())
    }
}
