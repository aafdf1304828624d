//! In-process HTTP harness shared by the integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use canteen_server::{Config, ServerState, build_router};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_app() -> Router {
    let config = Config::with_overrides(0, chrono_tz::Asia::Kolkata);
    build_router(ServerState::initialize(&config))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub fn line(id: &str, name: &str, price: u32, quantity: u32, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "quantity": quantity,
        "emoji": &name[..1],
        "category": category,
    })
}

pub fn instant_body(student: &str) -> Value {
    json!({
        "studentName": student,
        "items": [line("coffee", "Coffee", 30, 1, "Beverages")],
        "orderType": "INSTANT",
    })
}

pub fn prebook_body(student: &str, slot: &str) -> Value {
    json!({
        "studentName": student,
        "items": [line("biryani", "Veg Biryani", 100, 1, "Meals")],
        "orderType": "PREBOOK",
        "timeSlot": slot,
    })
}

/// Create an order and return its id
pub async fn create_order(app: &Router, body: Value) -> String {
    let (status, json) = post(app, "/api/orders", body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["data"]["id"].as_str().unwrap().to_string()
}
