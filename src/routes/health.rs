use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: u16,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
        tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: 200,
        message: "Healthy".to_string(),
    })
}
