use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{items::ItemPayload, shopcarts::ShopcartPayload},
    models::{Item, Shopcart},
    response::ErrorResponse,
    routes::{health, index, items, shopcarts},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        health::health_check,
        shopcarts::list_shopcarts,
        shopcarts::get_shopcart,
        shopcarts::create_shopcart,
        shopcarts::update_shopcart,
        shopcarts::delete_shopcart,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        items::clear_items
    ),
    components(
        schemas(
            Shopcart,
            Item,
            ShopcartPayload,
            ItemPayload,
            ErrorResponse,
            health::HealthData,
            index::ServiceInfo,
            index::ServicePaths
        )
    ),
    tags(
        (name = "Health", description = "Service metadata and liveness"),
        (name = "Shopcarts", description = "Shopcart endpoints"),
        (name = "Items", description = "Items inside a shopcart"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
