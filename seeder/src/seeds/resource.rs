use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::Utc;
use db::storage::{NewResource, Storage, StorageError};

pub struct ResourceSeeder;

#[async_trait]
impl Seeder for ResourceSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        let today = Utc::now().date_naive();

        storage
            .create_resource(NewResource {
                title: "Database Systems Concepts Ch.4-6".to_string(),
                course_code: Some("CSE-301".to_string()),
                category: "Textbooks".to_string(),
                file_type: "PDF".to_string(),
                file_size: Some("5.2 MB".to_string()),
                file_url: "/resources/db-concepts-ch4-6.pdf".to_string(),
                upload_date: today,
            })
            .await?;

        storage
            .create_resource(NewResource {
                title: "Network Security Lecture Notes Week 8".to_string(),
                course_code: Some("CSE-305".to_string()),
                category: "Lecture Notes".to_string(),
                file_type: "DOC".to_string(),
                file_size: Some("1.8 MB".to_string()),
                file_url: "/resources/network-security-week8.doc".to_string(),
                upload_date: today,
            })
            .await?;

        Ok(())
    }
}
