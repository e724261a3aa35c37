use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::items::ItemPayload,
    error::AppResult,
    models::Item,
    response::{Created, ErrorResponse},
    routes::{
        extract::{Filters, JsonBody, PathId},
        params::ItemQuery,
    },
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/shopcarts/{id}/items",
            get(list_items).post(create_item).delete(clear_items),
        )
        .route(
            "/shopcarts/{id}/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[utoipa::path(
    get,
    path = "/shopcarts/{id}/items",
    params(
        ("id" = i32, Path, description = "Shopcart ID"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Items matching every given filter", body = Vec<Item>),
        (status = 400, description = "Unparsable filter", body = ErrorResponse),
        (status = 404, description = "Shopcart not found", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    PathId(shopcart_id): PathId<i32>,
    Filters(query): Filters<ItemQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_items(&state, shopcart_id, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/shopcarts/{id}/items/{item_id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Shopcart or item not found", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    PathId((shopcart_id, item_id)): PathId<(i32, i32)>,
) -> AppResult<Json<Item>> {
    let item = item_service::get_item(&state, shopcart_id, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/shopcarts/{id}/items",
    params(
        ("id" = i32, Path, description = "Shopcart ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item added", body = Item,
            headers(("Location" = String, description = "URL of the new item"))),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Shopcart not found", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    PathId(shopcart_id): PathId<i32>,
    JsonBody(body): JsonBody,
) -> AppResult<Created<Item>> {
    let item = item_service::create_item(&state, shopcart_id, &body).await?;
    let location = format!("/shopcarts/{shopcart_id}/items/{}", item.id);
    Ok(Created::new(location, item))
}

#[utoipa::path(
    put,
    path = "/shopcarts/{id}/items/{item_id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Shopcart or item not found", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    PathId((shopcart_id, item_id)): PathId<(i32, i32)>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Item>> {
    let item = item_service::update_item(&state, shopcart_id, item_id, &body).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/shopcarts/{id}/items/{item_id}",
    params(
        ("id" = i32, Path, description = "Shopcart ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item is gone"),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PathId((shopcart_id, item_id)): PathId<(i32, i32)>,
) -> AppResult<StatusCode> {
    item_service::delete_item(&state, shopcart_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/shopcarts/{id}/items",
    params(
        ("id" = i32, Path, description = "Shopcart ID")
    ),
    responses(
        (status = 204, description = "The shopcart is empty"),
        (status = 404, description = "Shopcart not found", body = ErrorResponse),
    ),
    tag = "Items"
)]
pub async fn clear_items(
    State(state): State<AppState>,
    PathId(shopcart_id): PathId<i32>,
) -> AppResult<StatusCode> {
    item_service::clear_items(&state, shopcart_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
