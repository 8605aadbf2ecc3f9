use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use db::storage::{NewNotice, Storage, StorageError};

pub struct NoticeSeeder;

#[async_trait]
impl Seeder for NoticeSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        let now = Utc::now();

        storage
            .create_notice(NewNotice {
                title: "Lab Cancelled".to_string(),
                content: "The Database Systems lab scheduled for Oct 12 has been cancelled."
                    .to_string(),
                category: "Urgent".to_string(),
                posted_at: now,
                expires_at: Some(now + Duration::days(7)),
            })
            .await?;

        storage
            .create_notice(NewNotice {
                title: "Holiday Announcement".to_string(),
                content: "The campus will be closed on Oct 24 for the national holiday."
                    .to_string(),
                category: "General".to_string(),
                posted_at: now,
                expires_at: Some(now + Duration::days(15)),
            })
            .await?;

        Ok(())
    }
}
