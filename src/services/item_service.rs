use sea_orm::{ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QueryTrait};

use crate::{
    dto::items::ItemPayload,
    entity::{
        Shopcarts,
        items::{Column, Entity as Items, Model as ItemModel},
    },
    error::{AppError, AppResult},
    models::Item,
    persistence,
    routes::params::ItemQuery,
    services::shopcart_service,
    state::AppState,
};

fn item_not_found(shopcart_id: i32, item_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Item with id '{item_id}' could not be found in shopcart '{shopcart_id}'."
    ))
}

async fn ensure_shopcart(state: &AppState, shopcart_id: i32) -> AppResult<()> {
    match persistence::find::<Shopcarts>(&state.db, shopcart_id).await? {
        Some(_) => Ok(()),
        None => Err(shopcart_service::not_found(shopcart_id)),
    }
}

/// The item, provided it belongs to `shopcart_id`.
async fn find_in_cart(
    state: &AppState,
    shopcart_id: i32,
    item_id: i32,
) -> AppResult<Option<ItemModel>> {
    let item = persistence::find::<Items>(&state.db, item_id).await?;
    Ok(item.filter(|item| item.shopcart_id == shopcart_id))
}

pub async fn list_items(
    state: &AppState,
    shopcart_id: i32,
    query: ItemQuery,
) -> AppResult<Vec<Item>> {
    ensure_shopcart(state, shopcart_id).await?;

    let items = Items::find()
        .filter(Column::ShopcartId.eq(shopcart_id))
        .apply_if(query.name, |finder, name| finder.filter(Column::Name.eq(name)))
        .apply_if(query.quantity, |finder, quantity| {
            finder.filter(Column::Quantity.eq(quantity))
        })
        .order_by_asc(Column::Id)
        .all(&state.db)
        .await?;

    Ok(items.into_iter().map(Item::from).collect())
}

pub async fn get_item(state: &AppState, shopcart_id: i32, item_id: i32) -> AppResult<Item> {
    ensure_shopcart(state, shopcart_id).await?;
    find_in_cart(state, shopcart_id, item_id)
        .await?
        .map(Item::from)
        .ok_or_else(|| item_not_found(shopcart_id, item_id))
}

/// Add an item to a shopcart; the path's shopcart id overrides any in the body.
pub async fn create_item(
    state: &AppState,
    shopcart_id: i32,
    body: &serde_json::Value,
) -> AppResult<Item> {
    ensure_shopcart(state, shopcart_id).await?;
    let payload = ItemPayload::from_value(&with_shopcart_id(body, shopcart_id))?;

    let item = persistence::create(&state.db, payload.into_active_model(shopcart_id)).await?;
    tracing::info!(shopcart_id, item_id = item.id, "item added to shopcart");
    Ok(item.into())
}

pub async fn update_item(
    state: &AppState,
    shopcart_id: i32,
    item_id: i32,
    body: &serde_json::Value,
) -> AppResult<Item> {
    ensure_shopcart(state, shopcart_id).await?;
    let existing = find_in_cart(state, shopcart_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(shopcart_id, item_id))?;
    let payload = ItemPayload::from_value(&with_shopcart_id(body, shopcart_id))?;
    tracing::info!(shopcart_id, item_id, "updating item");

    let mut active = existing.into_active_model();
    payload.apply_to(&mut active);
    let item = persistence::update(&state.db, active).await?;
    Ok(item.into())
}

/// Deleting an absent item succeeds.
pub async fn delete_item(state: &AppState, shopcart_id: i32, item_id: i32) -> AppResult<()> {
    if let Some(item) = find_in_cart(state, shopcart_id, item_id).await? {
        persistence::delete(&state.db, item.into_active_model()).await?;
        tracing::info!(shopcart_id, item_id, "item deleted");
    }
    Ok(())
}

pub async fn clear_items(state: &AppState, shopcart_id: i32) -> AppResult<()> {
    ensure_shopcart(state, shopcart_id).await?;

    let txn = persistence::begin(&state.db).await?;
    let result = Items::delete_many()
        .filter(Column::ShopcartId.eq(shopcart_id))
        .exec(&txn)
        .await;
    let removed = persistence::finish(txn, result).await?;

    tracing::info!(
        shopcart_id,
        removed = removed.rows_affected,
        "shopcart items cleared"
    );
    Ok(())
}

fn with_shopcart_id(body: &serde_json::Value, shopcart_id: i32) -> serde_json::Value {
    let mut body = body.clone();
    if let Some(map) = body.as_object_mut() {
        map.insert("shopcart_id".to_string(), shopcart_id.into());
    }
    body
}
