pub mod reports;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use reports::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: health, OpenAPI document, the `/reports`
/// resource and, when configured, the static frontend as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: Option<&str>) -> Router {
    let reports = Router::new()
        .route("/reports", get(reports::list).post(reports::create))
        .route("/reports/:id", delete(reports::delete));

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .merge(reports)
        .with_state(state);

    if let Some(dir) = frontend_dir {
        let static_dir = ServeDir::new(dir).fallback(ServeFile::new(format!("{dir}/index.html")));
        app = app.fallback_service(static_dir);
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // status code and latency
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
