#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use serde_json::Value;
use shopcart_service::{db, routes::create_router, state::AppState};
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> String {
        self.headers
            .get(header::LOCATION)
            .expect("location header")
            .to_str()
            .expect("ascii location")
            .to_string()
    }
}

/// A router over a fresh in-memory database.
pub async fn app() -> Router {
    let db = db::init("sqlite::memory:")
        .await
        .expect("in-memory database");
    create_router(AppState { db })
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send(app, json_request("PUT", uri, body)).await
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Create a shopcart for `customer_id` and return its id.
pub async fn create_shopcart(app: &Router, customer_id: i64) -> i64 {
    let body = serde_json::json!({ "customer_id": customer_id });
    let resp = post_json(app, "/shopcarts", &body).await;
    assert_eq!(resp.status, StatusCode::CREATED, "could not create test shopcart");
    resp.body["id"].as_i64().expect("shopcart id")
}

/// Add an item to a shopcart and return its id.
pub async fn add_item(
    app: &Router,
    shopcart_id: i64,
    name: &str,
    quantity: i64,
    price: f64,
) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "description": format!("{name} from the grocery"),
        "quantity": quantity,
        "price": price
    });
    let resp = post_json(app, &format!("/shopcarts/{shopcart_id}/items"), &body).await;
    assert_eq!(resp.status, StatusCode::CREATED, "could not create test item");
    resp.body["id"].as_i64().expect("item id")
}
