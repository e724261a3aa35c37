use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub paths: ServicePaths,
}

#[derive(Serialize, ToSchema)]
pub struct ServicePaths {
    pub shopcarts: &'static str,
    pub items: &'static str,
    pub health: &'static str,
    pub docs: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo),
    ),
    tag = "Health"
)]
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Shopcart REST API Service",
        version: env!("CARGO_PKG_VERSION"),
        paths: ServicePaths {
            shopcarts: "/shopcarts",
            items: "/shopcarts/{id}/items",
            health: "/health",
            docs: "/docs",
        },
    })
}
