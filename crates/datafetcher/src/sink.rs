use crate::pipeline::CatalogSink;
use database::services::save_catalog::SaveCatalogService;
use models::{
    catalog::{CourseRecord, PercentageCourseRecord, ProfessorRecord, SectionRecord, UserRecord},
    requisite::{RequisiteEdge, RequisiteKind},
};
use sea_orm::{DatabaseConnection, DbErr};

/// Writes catalog rows to the database through [`SaveCatalogService`]
pub struct DatabaseSink<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseSink<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CatalogSink for DatabaseSink<'_> {
    type Error = DbErr;

    async fn save_user(&mut self, user: &UserRecord) -> Result<(), DbErr> {
        SaveCatalogService::save_user(self.db, user).await
    }

    async fn save_course(&mut self, course: &CourseRecord) -> Result<(), DbErr> {
        SaveCatalogService::save_course(self.db, course).await
    }

    async fn save_percentage_course(
        &mut self,
        marker: &PercentageCourseRecord,
    ) -> Result<(), DbErr> {
        SaveCatalogService::save_percentage_course(self.db, marker).await
    }

    async fn save_professor(&mut self, professor: &ProfessorRecord) -> Result<(), DbErr> {
        SaveCatalogService::save_professor(self.db, professor).await
    }

    async fn save_section(&mut self, section: &SectionRecord) -> Result<(), DbErr> {
        SaveCatalogService::save_section(self.db, section).await
    }

    async fn save_requisites(
        &mut self,
        kind: RequisiteKind,
        edges: &[RequisiteEdge],
    ) -> Result<u64, DbErr> {
        SaveCatalogService::save_requisites(self.db, kind, edges).await
    }
}
