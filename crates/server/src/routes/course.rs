use crate::dtos::course::{
    CourseQueryParams, CourseResponse, CourseSummary, PaginatedCoursesResponse, PaginationMeta,
    SectionResponse,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::query_course::QueryCourseService;
use log::error;
use models::course_data::CourseCode;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;

fn internal_error(e: DbErr) -> StatusCode {
    error!("Database query failed: {e}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(db): State<DatabaseConnection>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, StatusCode> {
    if !params.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let (courses, total_items) = QueryCourseService::get_courses_paginated(
        &db,
        params.page,
        params.per_page,
        params.subject,
        params.search,
    )
    .await
    .map_err(internal_error)?;

    Ok(Json(PaginatedCoursesResponse {
        courses: courses.into_iter().map(CourseSummary::from).collect(),
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}

/// Get a specific course by subject and catalog number
#[utoipa::path(
    get,
    path = "/courses/{subject}/{number}",
    params(
        ("subject" = String, Path, description = "Subject code, e.g. MATH"),
        ("number" = String, Path, description = "Catalog number, e.g. 135")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(db): State<DatabaseConnection>,
    Path((subject, number)): Path<(String, String)>,
) -> Result<Json<CourseResponse>, StatusCode> {
    let code = CourseCode::new(subject.to_uppercase(), number.to_uppercase());

    match QueryCourseService::get_course(&db, &code)
        .await
        .map_err(internal_error)?
    {
        Some(details) => Ok(Json(CourseResponse::from(details))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Get the sections offered for a course
#[utoipa::path(
    get,
    path = "/courses/{subject}/{number}/sections",
    params(
        ("subject" = String, Path, description = "Subject code, e.g. MATH"),
        ("number" = String, Path, description = "Catalog number, e.g. 135")
    ),
    responses(
        (status = 200, description = "Sections retrieved successfully", body = Vec<SectionResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_sections(
    State(db): State<DatabaseConnection>,
    Path((subject, number)): Path<(String, String)>,
) -> Result<Json<Vec<SectionResponse>>, StatusCode> {
    let code = CourseCode::new(subject.to_uppercase(), number.to_uppercase());

    let sections = QueryCourseService::get_sections(&db, &code)
        .await
        .map_err(internal_error)?;

    Ok(Json(
        sections
            .into_iter()
            .map(|(section, professor)| SectionResponse::new(section, professor))
            .collect(),
    ))
}

/// Get the subject codes available for filtering
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "Subjects retrieved successfully"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_subjects(
    State(db): State<DatabaseConnection>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let subjects = QueryCourseService::get_subjects(&db)
        .await
        .map_err(internal_error)?;

    Ok(Json(json!({ "subjects": subjects })))
}
