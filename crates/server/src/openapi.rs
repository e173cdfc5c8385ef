use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewReportDoc {
    pub tipo: String,
    pub descripcion: String,
    pub lat: f64,
    pub lon: f64,
    pub alcaldia: Option<String>,
    pub colonia: Option<String>,
}

#[derive(ToSchema)]
pub struct ReportDoc {
    pub id: i32,
    pub tipo: String,
    pub descripcion: String,
    pub lat: f64,
    pub lon: f64,
    pub alcaldia: Option<String>,
    pub colonia: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::reports::create,
        crate::routes::reports::list,
        crate::routes::reports::delete,
    ),
    components(
        schemas(
            HealthResponse,
            NewReportDoc,
            ReportDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "reports")
    )
)]
pub struct ApiDoc;
