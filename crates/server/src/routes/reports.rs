use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use configs::ReportsConfig;
use models::user_report::{self, NewReport};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use service::{
    pagination::ListLimit,
    report_service::{self, ReportFilter},
};
use tracing::info;

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub reports: Arc<ReportsConfig>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Incident type, exact match
    pub tipo: Option<String>,
    /// District, exact match
    pub alcaldia: Option<String>,
    /// Neighbourhood, exact match
    pub colonia: Option<String>,
    /// 1..=1000, default 200
    pub limit: Option<i64>,
}

#[utoipa::path(
    post, path = "/reports", tag = "reports",
    request_body = crate::openapi::NewReportDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ReportDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewReport>, JsonRejection>,
) -> Result<(StatusCode, Json<user_report::Model>), JsonApiError> {
    let Json(input) = payload?;
    let m = report_service::create_report(&state.db, input, &state.reports).await?;
    Ok((StatusCode::CREATED, Json(m)))
}

#[utoipa::path(
    get, path = "/reports", tag = "reports",
    params(ListQuery),
    responses(
        (status = 200, description = "Newest first", body = [crate::openapi::ReportDoc]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<user_report::Model>>, JsonApiError> {
    let Query(q) = query?;
    let limit = ListLimit::parse(q.limit, &state.reports)?;
    let filter = ReportFilter { tipo: q.tipo, alcaldia: q.alcaldia, colonia: q.colonia };
    let rows = report_service::list_reports(&state.db, &filter, limit).await?;
    info!(count = rows.len(), "list reports");
    Ok(Json(rows))
}

#[utoipa::path(
    delete, path = "/reports/{id}", tag = "reports",
    params(("id" = i32, Path, description = "Report id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Reporte no encontrado", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    report_service::delete_report(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
