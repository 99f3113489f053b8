use crate::routes::{course, health, professor, user};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::get_courses,
        course::get_course,
        course::get_course_sections,
        course::get_subjects,
        professor::get_professor,
        user::get_user
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Professors", description = "Professor endpoints"),
        (name = "Users", description = "Account endpoints"),
    ),
    info(
        title = "Course Catalog API",
        version = "1.0.0",
        description = "University of Waterloo course catalog",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
