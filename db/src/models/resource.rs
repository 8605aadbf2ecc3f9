use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A downloadable study resource (lecture notes, textbook chapters, links).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub course_code: Option<String>,
    /// Grouping used by the library view, e.g. "Lecture Notes" or "Textbooks".
    pub category: String,
    pub file_type: String,
    pub file_size: Option<String>,
    pub file_url: String,
    pub upload_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}
