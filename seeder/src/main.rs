use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    assignment::AssignmentSeeder, event::EventSeeder, notice::NoticeSeeder,
    resource::ResourceSeeder, schedule_slot::ScheduleSeeder, user::UserSeeder,
};
use db::storage::DatabaseStorage;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await;
    let storage = DatabaseStorage::new(db);

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder>, "User"),
        (Box::new(AssignmentSeeder), "Assignment"),
        (Box::new(ResourceSeeder), "Resource"),
        (Box::new(NoticeSeeder), "Notice"),
        (Box::new(ScheduleSeeder), "Schedule"),
        (Box::new(EventSeeder), "Event"),
    ] {
        run_seeder(&*seeder, name, &storage).await;
    }
}
