use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sections are always looked up by their course
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_course")
                    .table(Sections::Table)
                    .col(Sections::Subject)
                    .col(Sections::CourseNumber)
                    .to_owned(),
            )
            .await?;

        // Index on sections.professor_id for the professor view
        manager
            .create_index(
                Index::create()
                    .name("idx_sections_professor_id")
                    .table(Sections::Table)
                    .col(Sections::ProfessorId)
                    .to_owned(),
            )
            .await?;

        // Index on courses.name for title search
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_name")
                    .table(Courses::Table)
                    .col(Courses::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_name")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_professor_id")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_sections_course")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Name,
}

#[derive(Iden)]
enum Sections {
    Table,
    Subject,
    CourseNumber,
    ProfessorId,
}
