use serde::Deserialize;
use utoipa::IntoParams;

/// Filters for `GET /shopcarts`; all given filters must match.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopcartQuery {
    /// Exact customer id.
    pub customer_id: Option<i32>,
    /// Only shopcarts holding an item with exactly this name.
    pub item_name: Option<String>,
}

/// Filters for `GET /shopcarts/{id}/items`; all given filters must match.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    pub name: Option<String>,
    pub quantity: Option<i32>,
}
