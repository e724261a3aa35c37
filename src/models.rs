use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{items, shopcarts};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Item {
    pub id: i32,
    pub name: Option<String>,
    pub shopcart_id: i32,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Shopcart {
    pub id: i32,
    pub customer_id: i32,
    pub time_atc: DateTime<Utc>,
    pub items: Vec<Item>,
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            shopcart_id: model.shopcart_id,
            description: model.description,
            quantity: model.quantity,
            price: model.price,
        }
    }
}

impl Shopcart {
    pub fn from_entity(model: shopcarts::Model, items: Vec<items::Model>) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            time_atc: model.time_atc,
            items: items.into_iter().map(Item::from).collect(),
        }
    }
}
