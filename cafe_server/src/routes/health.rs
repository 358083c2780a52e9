use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = HealthResponse)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub message: String,
}

/// 헬스 체크 (DB 접근 없음)
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Cafe API server is running".to_string(),
    })
}
