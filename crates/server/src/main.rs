mod doc;
mod dtos;
mod routes;
mod utils;

use axum::{Router, routing::get};
use database::db::{DatabaseConfig, create_connection};
use doc::ApiDoc;
use log::{error, info};
use routes::{course, health, professor, user};
use std::{env, process::ExitCode};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utils::shutdown::shutdown_signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_API_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let db = match create_connection(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to the database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let port = match env::var("APIPORT") {
        Ok(port) => match port.parse::<u16>() {
            Ok(port) => port,
            Err(e) => {
                error!("APIPORT environment variable is invalid: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => DEFAULT_API_PORT,
    };

    let swagger =
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/courses", get(course::get_courses))
        .route("/courses/{subject}/{number}", get(course::get_course))
        .route(
            "/courses/{subject}/{number}/sections",
            get(course::get_course_sections),
        )
        .route("/subjects", get(course::get_subjects))
        .route("/professors/{uid}", get(professor::get_professor))
        .route("/users/{username}", get(user::get_user))
        .merge(swagger)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(db);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind port {port}: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Running axum on http://localhost:{port}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
