use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section: i32,
    pub subject: String,
    pub course_number: String,
    #[sea_orm(column_name = "type")]
    pub component: String, // e.g. "LEC", "TUT"
    pub professor_id: Option<String>,
    pub days: Option<i16>, // week pattern bitmask, Monday is the high bit
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub location_building: Option<String>,
    pub location_room: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "(Column::Subject, Column::CourseNumber)",
        to = "(super::course::Column::Subject, super::course::Column::CourseNumber)"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::Uid"
    )]
    Professor,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
