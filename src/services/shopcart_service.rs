use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, QueryTrait, Select, Set,
    sea_query::Query,
};

use crate::{
    dto::{items::ItemPayload, shopcarts::ShopcartPayload},
    entity::{
        items::{Column as ItemCol, Entity as Items},
        shopcarts::{
            ActiveModel as ShopcartActive, Column, Entity as Shopcarts, Model as ShopcartModel,
        },
    },
    error::{AppError, AppResult},
    models::Shopcart,
    persistence,
    routes::params::ShopcartQuery,
    state::AppState,
};

pub fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Shopcart with id '{id}' was not found."))
}

/// All shopcarts owned by `customer_id`.
pub fn find_by_customer(customer_id: i32) -> Select<Shopcarts> {
    tracing::info!(customer_id, "querying shopcarts by customer");
    Shopcarts::find().filter(Column::CustomerId.eq(customer_id))
}

pub async fn list_shopcarts(state: &AppState, query: ShopcartQuery) -> AppResult<Vec<Shopcart>> {
    let finder = match query.customer_id {
        Some(customer_id) => find_by_customer(customer_id),
        None => Shopcarts::find(),
    };

    let rows = finder
        .apply_if(query.item_name, |finder, name| {
            finder.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(ItemCol::ShopcartId)
                        .from(Items)
                        .and_where(ItemCol::Name.eq(name))
                        .to_owned(),
                ),
            )
        })
        .order_by_asc(Column::Id)
        .find_with_related(Items)
        .order_by_asc(ItemCol::Id)
        .all(&state.db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(cart, items)| Shopcart::from_entity(cart, items))
        .collect())
}

/// Load one shopcart together with its items.
pub async fn load(state: &AppState, id: i32) -> AppResult<Option<Shopcart>> {
    let Some(cart) = persistence::find::<Shopcarts>(&state.db, id).await? else {
        return Ok(None);
    };
    let items = cart
        .find_related(Items)
        .order_by_asc(ItemCol::Id)
        .all(&state.db)
        .await?;
    Ok(Some(Shopcart::from_entity(cart, items)))
}

pub async fn get_shopcart(state: &AppState, id: i32) -> AppResult<Shopcart> {
    load(state, id).await?.ok_or_else(|| not_found(id))
}

/// Create a shopcart and any nested items in one transaction. Client ids are ignored.
pub async fn create_shopcart(state: &AppState, payload: ShopcartPayload) -> AppResult<Shopcart> {
    let active = ShopcartActive {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        time_atc: Set(payload.time_atc.unwrap_or_else(Utc::now)),
    };

    let cart = match payload.items {
        None => persistence::create(&state.db, active).await?,
        Some(items) => {
            let txn = persistence::begin(&state.db).await?;
            let result = async {
                let cart = active.insert(&txn).await?;
                insert_items(&txn, cart.id, items).await?;
                Ok::<_, DbErr>(cart)
            }
            .await;
            persistence::finish(txn, result).await?
        }
    };

    tracing::info!(
        shopcart_id = cart.id,
        customer_id = cart.customer_id,
        "shopcart created"
    );
    get_shopcart(state, cart.id).await
}

/// Overwrite a shopcart. Omitted `time_atc`/`items` keep their stored values; a given
/// `items` list replaces the existing items.
pub async fn update_shopcart(
    state: &AppState,
    id: i32,
    body: &serde_json::Value,
) -> AppResult<Shopcart> {
    let existing = persistence::find::<Shopcarts>(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let payload = ShopcartPayload::from_value(body)?;
    tracing::info!(shopcart_id = id, "updating shopcart");

    let time_atc = payload.time_atc.unwrap_or(existing.time_atc);
    let mut active = existing.into_active_model();
    active.customer_id = Set(payload.customer_id);
    active.time_atc = Set(time_atc);

    match payload.items {
        None => {
            persistence::update(&state.db, active).await?;
        }
        Some(items) => {
            let txn = persistence::begin(&state.db).await?;
            let result = async {
                active.update(&txn).await?;
                Items::delete_many()
                    .filter(ItemCol::ShopcartId.eq(id))
                    .exec(&txn)
                    .await?;
                insert_items(&txn, id, items).await
            }
            .await;
            persistence::finish(txn, result).await?;
        }
    }

    get_shopcart(state, id).await
}

/// Delete a shopcart and its items. Deleting an absent shopcart succeeds.
pub async fn delete_shopcart(state: &AppState, id: i32) -> AppResult<()> {
    let Some(cart) = persistence::find::<Shopcarts>(&state.db, id).await? else {
        return Ok(());
    };

    let txn = persistence::begin(&state.db).await?;
    let result = remove_with_items(&txn, cart).await;
    persistence::finish(txn, result).await?;

    tracing::info!(shopcart_id = id, "shopcart deleted");
    Ok(())
}

async fn remove_with_items<C: ConnectionTrait>(
    conn: &C,
    cart: ShopcartModel,
) -> Result<(), DbErr> {
    Items::delete_many()
        .filter(ItemCol::ShopcartId.eq(cart.id))
        .exec(conn)
        .await?;
    cart.delete(conn).await?;
    Ok(())
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    shopcart_id: i32,
    items: Vec<ItemPayload>,
) -> Result<(), DbErr> {
    for item in items {
        item.into_active_model(shopcart_id).insert(conn).await?;
    }
    Ok(())
}
