use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subject: String, // e.g. "MATH"
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String, // e.g. "135"
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::section::Entity")]
    Sections,
    #[sea_orm(has_one = "super::percentage_course::Entity")]
    PercentageCourse,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl Related<super::percentage_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PercentageCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
