use chrono::{DateTime, Utc};
use serde_json::Value;
use utoipa::ToSchema;

use super::{Fields, items::ItemPayload};
use crate::error::DataValidationError;

/// Body of `POST`/`PUT` on shopcart resources.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct ShopcartPayload {
    /// Ignored on write; the database assigns shopcart ids.
    pub id: Option<i32>,
    pub customer_id: i32,
    /// Defaults to the creation time, or to the stored value on update.
    pub time_atc: Option<DateTime<Utc>>,
    /// When present on update, replaces the cart's items.
    pub items: Option<Vec<ItemPayload>>,
}

impl ShopcartPayload {
    pub fn from_value(value: &Value) -> Result<Self, DataValidationError> {
        let fields = Fields::of("Shopcart", value)?;
        let items = fields
            .optional_list("items")?
            .map(|list| list.iter().map(ItemPayload::from_value).collect())
            .transpose()?;

        Ok(Self {
            id: fields.optional_i32("id")?,
            customer_id: fields.required_i32("customer_id")?,
            time_atc: fields.optional_timestamp("time_atc")?,
            items,
        })
    }
}
