use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use db::models::assignment::Status;
use db::storage::{NewAssignment, Storage, StorageError};

pub struct AssignmentSeeder;

#[async_trait]
impl Seeder for AssignmentSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        let today = Utc::now().date_naive();

        storage
            .create_assignment(NewAssignment {
                title: "Database Normalization Exercise".to_string(),
                course: "Database Systems".to_string(),
                course_code: "CSE-301".to_string(),
                due_date: today + Duration::days(7),
                status: Status::Pending,
                description: Some(
                    "Complete the database normalization exercises from chapter 4".to_string(),
                ),
                posted_date: today,
                file_url: None,
            })
            .await?;

        storage
            .create_assignment(NewAssignment {
                title: "Network Security Protocol Analysis".to_string(),
                course: "Network Security".to_string(),
                course_code: "CSE-305".to_string(),
                due_date: today + Duration::days(10),
                status: Status::Pending,
                description: Some("Analyze the security protocols discussed in class".to_string()),
                posted_date: today,
                file_url: None,
            })
            .await?;

        Ok(())
    }
}
