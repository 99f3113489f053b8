use crate::dtos::course::{ProfessorResponse, SectionResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::query_course::QueryCourseService;
use log::error;
use sea_orm::DatabaseConnection;

/// Get a professor and the sections they teach
#[utoipa::path(
    get,
    path = "/professors/{uid}",
    params(
        ("uid" = String, Path, description = "Professor unique identifier")
    ),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 404, description = "Professor not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Professors"
)]
pub async fn get_professor(
    State(db): State<DatabaseConnection>,
    Path(uid): Path<String>,
) -> Result<Json<ProfessorResponse>, StatusCode> {
    let found = QueryCourseService::get_professor(&db, &uid)
        .await
        .map_err(|e| {
            error!("Failed to load professor {uid}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let Some((professor, sections)) = found else {
        return Err(StatusCode::NOT_FOUND);
    };

    // Sections listed here all belong to this professor
    let sections = sections
        .into_iter()
        .map(|section| SectionResponse::new(section, Some(professor.clone())))
        .collect();

    Ok(Json(ProfessorResponse {
        uid: professor.uid,
        name: professor.name,
        sections,
    }))
}
