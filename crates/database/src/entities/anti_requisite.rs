use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Edge from a course to a course that cannot be taken alongside it
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "anti_requisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subject: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_number: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub requisite_subject: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub requisite_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
