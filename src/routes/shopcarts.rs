use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::shopcarts::ShopcartPayload,
    error::AppResult,
    models::Shopcart,
    response::{Created, ErrorResponse},
    routes::{
        extract::{Filters, JsonBody, PathId},
        params::ShopcartQuery,
    },
    services::shopcart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shopcarts", get(list_shopcarts).post(create_shopcart))
        .route(
            "/shopcarts/{id}",
            get(get_shopcart).put(update_shopcart).delete(delete_shopcart),
        )
}

#[utoipa::path(
    get,
    path = "/shopcarts",
    params(ShopcartQuery),
    responses(
        (status = 200, description = "Shopcarts matching every given filter", body = Vec<Shopcart>),
        (status = 400, description = "Unparsable filter", body = ErrorResponse),
    ),
    tag = "Shopcarts"
)]
pub async fn list_shopcarts(
    State(state): State<AppState>,
    Filters(query): Filters<ShopcartQuery>,
) -> AppResult<Json<Vec<Shopcart>>> {
    tracing::debug!(?query, "listing shopcarts");
    let carts = shopcart_service::list_shopcarts(&state, query).await?;
    Ok(Json(carts))
}

#[utoipa::path(
    get,
    path = "/shopcarts/{id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID")
    ),
    responses(
        (status = 200, description = "The shopcart with its items", body = Shopcart),
        (status = 404, description = "Shopcart not found", body = ErrorResponse),
    ),
    tag = "Shopcarts"
)]
pub async fn get_shopcart(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> AppResult<Json<Shopcart>> {
    let cart = shopcart_service::get_shopcart(&state, id).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    post,
    path = "/shopcarts",
    request_body = ShopcartPayload,
    responses(
        (status = 201, description = "Shopcart created", body = Shopcart,
            headers(("Location" = String, description = "URL of the new shopcart"))),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
    ),
    tag = "Shopcarts"
)]
pub async fn create_shopcart(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Created<Shopcart>> {
    let payload = ShopcartPayload::from_value(&body)?;
    let cart = shopcart_service::create_shopcart(&state, payload).await?;
    Ok(Created::new(format!("/shopcarts/{}", cart.id), cart))
}

#[utoipa::path(
    put,
    path = "/shopcarts/{id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID")
    ),
    request_body = ShopcartPayload,
    responses(
        (status = 200, description = "Updated shopcart", body = Shopcart),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Shopcart not found", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
    ),
    tag = "Shopcarts"
)]
pub async fn update_shopcart(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Shopcart>> {
    let cart = shopcart_service::update_shopcart(&state, id, &body).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    delete,
    path = "/shopcarts/{id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID")
    ),
    responses(
        (status = 204, description = "Shopcart and its items are gone"),
    ),
    tag = "Shopcarts"
)]
pub async fn delete_shopcart(
    State(state): State<AppState>,
    PathId(id): PathId<i32>,
) -> AppResult<StatusCode> {
    shopcart_service::delete_shopcart(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
