use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    routing::get,
};

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod extract;
pub mod health;
pub mod index;
pub mod items;
pub mod params;
pub mod shopcarts;

/// Largest request body accepted by any route.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Every route of the service with its state bound; middleware is added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .merge(shopcarts::router())
        .merge(items::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("{} was not found on this server.", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!(
        "The method {method} is not allowed for {}.",
        uri.path()
    ))
}
