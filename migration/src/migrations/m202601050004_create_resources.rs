use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601050004_create_resources"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("resources"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("title")).text().not_null())
                    .col(ColumnDef::new(Alias::new("course_code")).text())
                    .col(ColumnDef::new(Alias::new("category")).text().not_null())
                    .col(ColumnDef::new(Alias::new("file_type")).text().not_null())
                    .col(ColumnDef::new(Alias::new("file_size")).text())
                    .col(ColumnDef::new(Alias::new("file_url")).text().not_null())
                    .col(ColumnDef::new(Alias::new("upload_date")).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("resources")).to_owned())
            .await
    }
}
