use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table, keyed by (subject, course_number)
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::CourseNumber).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .primary_key(
                        Index::create()
                            .col(Courses::Subject)
                            .col(Courses::CourseNumber),
                    )
                    .to_owned(),
            )
            .await?;

        // Create percentage_courses marker table
        manager
            .create_table(
                Table::create()
                    .table(PercentageCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PercentageCourses::Subject)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PercentageCourses::CourseNumber)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PercentageCourses::Subject)
                            .col(PercentageCourses::CourseNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-percentage_courses-course")
                            .from(
                                PercentageCourses::Table,
                                (PercentageCourses::Subject, PercentageCourses::CourseNumber),
                            )
                            .to(Courses::Table, (Courses::Subject, Courses::CourseNumber))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::Section).integer().not_null())
                    .col(ColumnDef::new(Sections::Subject).string().not_null())
                    .col(ColumnDef::new(Sections::CourseNumber).string().not_null())
                    .col(ColumnDef::new(Sections::Type).string().not_null())
                    .col(ColumnDef::new(Sections::ProfessorId).string())
                    .col(ColumnDef::new(Sections::Days).small_integer())
                    .col(ColumnDef::new(Sections::StartTime).time())
                    .col(ColumnDef::new(Sections::EndTime).time())
                    .col(ColumnDef::new(Sections::LocationBuilding).string())
                    .col(ColumnDef::new(Sections::LocationRoom).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-course")
                            .from(Sections::Table, (Sections::Subject, Sections::CourseNumber))
                            .to(Courses::Table, (Courses::Subject, Courses::CourseNumber))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-professor_id")
                            .from(Sections::Table, Sections::ProfessorId)
                            .to(Professors::Table, Professors::Uid)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create the two requisite edge tables, both endpoints referencing courses
        for requisite in [RequisiteTable::Pre, RequisiteTable::Anti] {
            manager
                .create_table(
                    Table::create()
                        .table(requisite.table())
                        .if_not_exists()
                        .col(ColumnDef::new(Requisites::Subject).string().not_null())
                        .col(ColumnDef::new(Requisites::CourseNumber).string().not_null())
                        .col(
                            ColumnDef::new(Requisites::RequisiteSubject)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Requisites::RequisiteNumber)
                                .string()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(Requisites::Subject)
                                .col(Requisites::CourseNumber)
                                .col(Requisites::RequisiteSubject)
                                .col(Requisites::RequisiteNumber),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk-{}-course", requisite.name()))
                                .from(
                                    requisite.table(),
                                    (Requisites::Subject, Requisites::CourseNumber),
                                )
                                .to(Courses::Table, (Courses::Subject, Courses::CourseNumber))
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk-{}-requisite", requisite.name()))
                                .from(
                                    requisite.table(),
                                    (Requisites::RequisiteSubject, Requisites::RequisiteNumber),
                                )
                                .to(Courses::Table, (Courses::Subject, Courses::CourseNumber))
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for requisite in [RequisiteTable::Anti, RequisiteTable::Pre] {
            manager
                .drop_table(
                    Table::drop()
                        .table(requisite.table())
                        .if_exists()
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Sections::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Professors::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(PercentageCourses::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

/// The pre- and anti-requisite tables share one column layout
#[derive(Clone, Copy)]
enum RequisiteTable {
    Pre,
    Anti,
}

impl RequisiteTable {
    fn name(self) -> &'static str {
        match self {
            Self::Pre => "pre_requisites",
            Self::Anti => "anti_requisites",
        }
    }

    fn table(self) -> Alias {
        Alias::new(self.name())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
    Email,
    IsAdmin,
}

#[derive(Iden)]
enum Courses {
    Table,
    Subject,
    CourseNumber,
    Name,
    Description,
}

#[derive(Iden)]
enum PercentageCourses {
    Table,
    Subject,
    CourseNumber,
}

#[derive(Iden)]
enum Professors {
    Table,
    Uid,
    Name,
}

#[derive(Iden)]
enum Sections {
    Table,
    Id,
    Section,
    Subject,
    CourseNumber,
    Type,
    ProfessorId,
    Days,
    StartTime,
    EndTime,
    LocationBuilding,
    LocationRoom,
}

#[derive(Iden)]
enum Requisites {
    Subject,
    CourseNumber,
    RequisiteSubject,
    RequisiteNumber,
}
