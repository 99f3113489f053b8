use chrono::NaiveTime;
use database::{
    entities::{course, professor, section},
    services::{query_course::CourseDetails, save_catalog::days_from_column},
};
use models::course_data::CourseCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Largest page size a client may request
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseSummary {
    pub subject: String,
    pub number: String,
    pub name: String,
}

impl From<course::Model> for CourseSummary {
    fn from(course: course::Model) -> Self {
        Self {
            subject: course.subject,
            number: course.course_number,
            name: course.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub subject: String,
    pub number: String,
    pub name: String,
    pub description: Option<String>,
    /// Whether the course is graded on a percentage basis
    pub percentage_graded: bool,
    /// Courses that must be completed first, e.g. "MATH 135"
    pub prerequisites: Vec<String>,
    /// Courses that cannot be taken for credit alongside this one
    pub antirequisites: Vec<String>,
    pub sections: Vec<SectionResponse>,
}

impl From<CourseDetails> for CourseResponse {
    fn from(details: CourseDetails) -> Self {
        let codes = |codes: Vec<CourseCode>| -> Vec<String> {
            codes.iter().map(ToString::to_string).collect()
        };

        Self {
            subject: details.course.subject,
            number: details.course.course_number,
            name: details.course.name,
            description: details.course.description,
            percentage_graded: details.percentage_graded,
            prerequisites: codes(details.prerequisites),
            antirequisites: codes(details.antirequisites),
            sections: details
                .sections
                .into_iter()
                .map(|(section, professor)| SectionResponse::new(section, professor))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorSummary {
    pub uid: String,
    pub name: String,
}

impl From<professor::Model> for ProfessorSummary {
    fn from(professor: professor::Model) -> Self {
        Self {
            uid: professor.uid,
            name: professor.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub section: i32,
    pub subject: String,
    pub number: String,
    /// Component code, e.g. "LEC", "TUT"
    pub component: String,
    pub professor: Option<ProfessorSummary>,
    /// Meeting-day bitmask, Monday is the high bit
    pub days: Option<i16>,
    /// Meeting days as letters, e.g. "MWF"
    pub days_pattern: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub building: Option<String>,
    pub room: Option<String>,
}

impl SectionResponse {
    pub fn new(section: section::Model, professor: Option<professor::Model>) -> Self {
        Self {
            section: section.section,
            subject: section.subject,
            number: section.course_number,
            component: section.component,
            professor: professor.map(ProfessorSummary::from),
            days: section.days,
            days_pattern: days_from_column(section.days).map(|d| d.to_string()),
            start_time: section.start_time,
            end_time: section.end_time,
            building: section.location_building,
            room: section.location_room,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub uid: String,
    pub name: String,
    pub sections: Vec<SectionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseSummary>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// Subject code, e.g. "MATH"
    pub subject: Option<String>,
    /// Matches the catalog number exactly or part of the course name
    pub search: Option<String>,
}

impl CourseQueryParams {
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && (1..=MAX_PER_PAGE).contains(&self.per_page)
    }
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}
