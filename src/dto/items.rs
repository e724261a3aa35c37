use sea_orm::{ActiveValue::NotSet, Set};
use serde_json::Value;
use utoipa::ToSchema;

use super::Fields;
use crate::{entity::items, error::DataValidationError};

/// Body of `POST`/`PUT` on item resources.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct ItemPayload {
    /// Ignored on write; the database assigns item ids.
    pub id: Option<i32>,
    /// Overwritten with the shopcart id from the path.
    pub shopcart_id: Option<i32>,
    #[schema(max_length = 63)]
    pub name: Option<String>,
    #[schema(max_length = 63)]
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

impl ItemPayload {
    pub fn from_value(value: &Value) -> Result<Self, DataValidationError> {
        let fields = Fields::of("Item", value)?;
        Ok(Self {
            id: fields.optional_i32("id")?,
            shopcart_id: fields.optional_i32("shopcart_id")?,
            name: fields.optional_text("name")?,
            description: fields.required_text("description")?,
            quantity: fields.required_i32("quantity")?,
            price: fields.required_f64("price")?,
        })
    }

    /// A new row owned by `shopcart_id`.
    pub fn into_active_model(self, shopcart_id: i32) -> items::ActiveModel {
        items::ActiveModel {
            id: NotSet,
            shopcart_id: Set(shopcart_id),
            name: Set(self.name),
            description: Set(self.description),
            quantity: Set(self.quantity),
            price: Set(self.price),
        }
    }

    /// Copy the writable columns onto an existing row.
    pub fn apply_to(self, active: &mut items::ActiveModel) {
        active.name = Set(self.name);
        active.description = Set(self.description);
        active.quantity = Set(self.quantity);
        active.price = Set(self.price);
    }
}
