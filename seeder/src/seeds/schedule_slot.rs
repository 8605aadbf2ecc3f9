use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::schedule_slot::Status;
use db::storage::{NewScheduleSlot, Storage, StorageError};

pub struct ScheduleSeeder;

#[async_trait]
impl Seeder for ScheduleSeeder {
    async fn seed(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        storage
            .create_schedule_slot(NewScheduleSlot {
                day: "Thursday".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:30".to_string(),
                course: "Database Systems".to_string(),
                course_code: "CSE-301".to_string(),
                room: Some("Lab 3".to_string()),
                building: Some("Block B".to_string()),
                slot_type: "Lab".to_string(),
                status: Status::Cancelled,
            })
            .await?;

        storage
            .create_schedule_slot(NewScheduleSlot {
                day: "Thursday".to_string(),
                start_time: "13:00".to_string(),
                end_time: "14:30".to_string(),
                course: "Network Security".to_string(),
                course_code: "CSE-305".to_string(),
                room: Some("Room 204".to_string()),
                building: Some("Block A".to_string()),
                slot_type: "Lecture".to_string(),
                status: Status::Active,
            })
            .await?;

        Ok(())
    }
}
