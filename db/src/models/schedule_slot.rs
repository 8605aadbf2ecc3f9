use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One recurring timetable slot.
///
/// Times are stored as "HH:MM" strings; the timetable is a weekly grid, not
/// a set of absolute instants.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day of week, e.g. "Monday".
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub course: String,
    pub course_code: String,
    pub room: Option<String>,
    pub building: Option<String>,
    /// E.g. "Lecture", "Lab", "Tutorial".
    pub slot_type: String,
    pub status: Status,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    sea_orm::strum::Display,
    sea_orm::strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(ascii_case_insensitive)]
pub enum Status {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}
