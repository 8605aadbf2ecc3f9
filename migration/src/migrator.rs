use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601050001_create_users::Migration),
            Box::new(migrations::m202601050002_create_assignments::Migration),
            Box::new(migrations::m202601050003_create_submissions::Migration),
            Box::new(migrations::m202601050004_create_resources::Migration),
            Box::new(migrations::m202601050005_create_notices::Migration),
            Box::new(migrations::m202601050006_create_schedule_slots::Migration),
            Box::new(migrations::m202601050007_create_todos::Migration),
            Box::new(migrations::m202601050008_create_events::Migration),
            Box::new(migrations::m202601050009_create_messages::Migration),
            Box::new(migrations::m202601050010_create_auth_sessions::Migration),
        ]
    }
}
