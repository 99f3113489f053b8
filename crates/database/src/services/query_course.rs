use crate::entities::{anti_requisite, course, percentage_course, pre_requisite, professor, section};
use models::course_data::CourseCode;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// A section together with the professor who teaches it, if any
pub type SectionWithProfessor = (section::Model, Option<professor::Model>);

/// Everything the API shows for a single course
#[derive(Debug, Clone)]
pub struct CourseDetails {
    pub course: course::Model,
    pub percentage_graded: bool,
    pub prerequisites: Vec<CourseCode>,
    pub antirequisites: Vec<CourseCode>,
    pub sections: Vec<SectionWithProfessor>,
}

pub struct QueryCourseService;

impl QueryCourseService {
    /// Query courses with pagination and filtering
    ///
    /// `page` is 1-based.
    pub async fn get_courses_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        subject: Option<String>,
        search: Option<String>,
    ) -> Result<(Vec<course::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(subject) = subject
            && !subject.is_empty()
        {
            condition = condition.add(course::Column::Subject.eq(subject.to_uppercase()));
        }

        if let Some(search) = search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            condition = condition.add(
                Condition::any()
                    .add(course::Column::CourseNumber.eq(search))
                    .add(course::Column::Name.contains(search)),
            );
        }

        let query = course::Entity::find()
            .filter(condition)
            .order_by_asc(course::Column::Subject)
            .order_by_asc(course::Column::CourseNumber);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        // SeaORM pages are 0-based
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((courses, total_items))
    }

    /// Get a single course with its grading flag, requisites and sections
    pub async fn get_course(
        db: &DatabaseConnection,
        code: &CourseCode,
    ) -> Result<Option<CourseDetails>, DbErr> {
        let key = (code.subject.clone(), code.number.clone());

        let course = match course::Entity::find_by_id(key.clone()).one(db).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let percentage_graded = percentage_course::Entity::find_by_id(key)
            .one(db)
            .await?
            .is_some();

        let prerequisites = pre_requisite::Entity::find()
            .filter(pre_requisite::Column::Subject.eq(code.subject.as_str()))
            .filter(pre_requisite::Column::CourseNumber.eq(code.number.as_str()))
            .all(db)
            .await?
            .into_iter()
            .map(|r| CourseCode::new(r.requisite_subject, r.requisite_number))
            .collect();

        let antirequisites = anti_requisite::Entity::find()
            .filter(anti_requisite::Column::Subject.eq(code.subject.as_str()))
            .filter(anti_requisite::Column::CourseNumber.eq(code.number.as_str()))
            .all(db)
            .await?
            .into_iter()
            .map(|r| CourseCode::new(r.requisite_subject, r.requisite_number))
            .collect();

        let sections = Self::get_sections(db, code).await?;

        Ok(Some(CourseDetails {
            course,
            percentage_graded,
            prerequisites,
            antirequisites,
            sections,
        }))
    }

    /// Get the sections of a course, in section order
    pub async fn get_sections(
        db: &DatabaseConnection,
        code: &CourseCode,
    ) -> Result<Vec<SectionWithProfessor>, DbErr> {
        section::Entity::find()
            .filter(section::Column::Subject.eq(code.subject.as_str()))
            .filter(section::Column::CourseNumber.eq(code.number.as_str()))
            .order_by_asc(section::Column::Section)
            .find_also_related(professor::Entity)
            .all(db)
            .await
    }

    /// Get a professor with every section they teach
    pub async fn get_professor(
        db: &DatabaseConnection,
        uid: &str,
    ) -> Result<Option<(professor::Model, Vec<section::Model>)>, DbErr> {
        let professor = match professor::Entity::find_by_id(uid.to_string()).one(db).await? {
            Some(professor) => professor,
            None => return Ok(None),
        };

        let sections = section::Entity::find()
            .filter(section::Column::ProfessorId.eq(uid))
            .order_by_asc(section::Column::Subject)
            .order_by_asc(section::Column::CourseNumber)
            .order_by_asc(section::Column::Section)
            .all(db)
            .await?;

        Ok(Some((professor, sections)))
    }

    /// Get every subject code that has at least one course, alphabetically
    pub async fn get_subjects(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        course::Entity::find()
            .select_only()
            .column(course::Column::Subject)
            .distinct()
            .order_by_asc(course::Column::Subject)
            .into_tuple::<String>()
            .all(db)
            .await
    }
}
