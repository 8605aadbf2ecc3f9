use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601050006_create_schedule_slots"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("schedule_slots"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("day")).text().not_null())
                    .col(ColumnDef::new(Alias::new("start_time")).text().not_null())
                    .col(ColumnDef::new(Alias::new("end_time")).text().not_null())
                    .col(ColumnDef::new(Alias::new("course")).text().not_null())
                    .col(ColumnDef::new(Alias::new("course_code")).text().not_null())
                    .col(ColumnDef::new(Alias::new("room")).text())
                    .col(ColumnDef::new(Alias::new("building")).text())
                    .col(ColumnDef::new(Alias::new("slot_type")).text().not_null())
                    .col(ColumnDef::new(Alias::new("status")).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("schedule_slots")).to_owned())
            .await
    }
}
