use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use db::storage::{NewEvent, Storage, StorageError};

pub struct EventSeeder;

#[async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        let today = Utc::now().date_naive();

        storage
            .create_event(NewEvent {
                title: "Database Assignment Due".to_string(),
                date: today + Duration::days(7),
                category: "Assignment".to_string(),
                description: Some("Database Normalization Exercise due".to_string()),
            })
            .await?;

        storage
            .create_event(NewEvent {
                title: "Database Systems Exam".to_string(),
                date: today + Duration::days(9),
                category: "Exam".to_string(),
                description: Some("Midterm exam covering chapters 1-6".to_string()),
            })
            .await?;

        Ok(())
    }
}
