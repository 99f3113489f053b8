use crate::dtos::user::UserResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::query_user::QueryUserService;
use log::error;
use sea_orm::DatabaseConnection;

/// Get an account by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    params(
        ("username" = String, Path, description = "Account username")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(db): State<DatabaseConnection>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, StatusCode> {
    QueryUserService::get_user(&db, &username)
        .await
        .map_err(|e| {
            error!("Failed to load user {username}: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(|user| Json(UserResponse::from(user)))
        .ok_or(StatusCode::NOT_FOUND)
}
