//! End-to-end API tests driving the router in-process.
//!
//! Each test builds a fresh `AppState` (isolated store, default rules:
//! every 3rd order mints a code, 10% discount) and sends requests through
//! `tower::ServiceExt::oneshot` without binding a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use shoplite_server::router;
use shoplite_server::state::AppState;

/// "admin:password", the default credentials.
const ADMIN_AUTH: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

fn app() -> Router {
    router(AppState::default())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    auth: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body), None).await
}

async fn admin_get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, Some(ADMIN_AUTH)).await
}

/// Adds one unit of item "1" and checks out, returning the response body.
async fn quick_checkout(app: &Router) -> Value {
    let (status, _) = post(app, "/api/cart/add", json!({"itemId": "1"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = post(app, "/api/checkout", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn items_lists_the_seeded_catalog() {
    let app = app();
    let (status, body) = get(&app, "/api/items").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[0]["priceCents"], 1000);
}

#[tokio::test]
async fn add_to_cart_merges_duplicate_items() {
    let app = app();

    post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 2})).await;
    let (status, body) =
        post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 3})).await;

    assert_eq!(status, StatusCode::OK);
    let lines = body["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 5);
    assert_eq!(body["subtotalCents"], 5000);
}

#[tokio::test]
async fn add_unknown_item_returns_404() {
    let app = app();
    let (status, body) = post(&app, "/api/cart/add", json!({"itemId": "99"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn add_zero_quantity_returns_400() {
    let app = app();
    let (status, body) =
        post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 0})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_and_remove_cart_lines() {
    let app = app();
    post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 2})).await;
    post(&app, "/api/cart/add", json!({"itemId": "2", "quantity": 1})).await;

    let (status, body) = post(
        &app,
        "/api/cart/update",
        json!({"itemId": "1", "quantity": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuantity"], 6);

    let (status, body) = post(&app, "/api/cart/remove", json!({"itemId": "2"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn checkout_computes_exact_total() {
    let app = app();
    post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 2})).await;

    let (status, body) = post(&app, "/api/checkout", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["id"], 1);
    assert_eq!(body["order"]["totalCents"], 2000);
    assert!(body["order"].get("discountAmountCents").is_none());
    assert!(body.get("generatedCouponCode").is_none());

    // The cart was reset
    let (_, cart) = get(&app, "/api/cart").await;
    assert!(cart["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_empty_cart_returns_400() {
    let app = app();
    let (status, body) = post(&app, "/api/checkout", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_CART");

    // Nothing changed: no orders in the history
    let (_, orders) = admin_get(&app, "/api/admin/orders").await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn third_checkout_mints_a_redeemable_code() {
    let app = app();

    let first = quick_checkout(&app).await;
    assert!(first.get("generatedCouponCode").is_none());
    let second = quick_checkout(&app).await;
    assert!(second.get("generatedCouponCode").is_none());

    let third = quick_checkout(&app).await;
    let code = third["generatedCouponCode"].as_str().unwrap().to_string();

    // The minted code shows up in the admin stats as live
    let (_, stats) = admin_get(&app, "/api/admin/stats").await;
    assert_eq!(stats["discountCodes"], json!([code.clone()]));

    // Redeem it: 10% off exactly, single use
    post(&app, "/api/cart/add", json!({"itemId": "2"})).await;
    let (status, body) =
        post(&app, "/api/checkout", json!({"discountCode": code.clone()})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["totalCents"], 1800);
    assert_eq!(body["order"]["discountAmountCents"], 200);
    assert_eq!(body["order"]["discountCode"], code);

    let (_, stats) = admin_get(&app, "/api/admin/stats").await;
    assert!(stats["discountCodes"].as_array().unwrap().is_empty());
    assert_eq!(stats["totalDiscountAmountCents"], 200);

    // A second attempt with the consumed code goes through at full price
    post(&app, "/api/cart/add", json!({"itemId": "1"})).await;
    let (_, body) = post(&app, "/api/checkout", json!({"discountCode": code})).await;
    assert_eq!(body["order"]["totalCents"], 1000);
    assert!(body["order"].get("discountCode").is_none());
}

#[tokio::test]
async fn unknown_discount_code_is_silently_ignored() {
    let app = app();
    post(&app, "/api/cart/add", json!({"itemId": "3", "quantity": 2})).await;

    let (status, body) =
        post(&app, "/api/checkout", json!({"discountCode": "BOGUS"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["totalCents"], 6000);
    assert!(body["order"].get("discountCode").is_none());
}

#[tokio::test]
async fn stats_aggregate_the_whole_history() {
    let app = app();

    // Two orders: 2 x $10.00 and 1 x $30.00
    post(&app, "/api/cart/add", json!({"itemId": "1", "quantity": 2})).await;
    post(&app, "/api/checkout", json!({})).await;
    post(&app, "/api/cart/add", json!({"itemId": "3"})).await;
    post(&app, "/api/checkout", json!({})).await;

    let (status, stats) = admin_get(&app, "/api/admin/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["itemsPurchased"], 3);
    assert_eq!(stats["totalPurchaseAmountCents"], 5000);
    assert_eq!(stats["totalDiscountAmountCents"], 0);
}

#[tokio::test]
async fn admin_endpoints_reject_bad_credentials() {
    let app = app();

    let (status, body) = get(&app, "/api/admin/stats").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/admin/stats",
        None,
        Some("Basic d3Jvbmc6d3Jvbmc="),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_order_lookup() {
    let app = app();
    quick_checkout(&app).await;

    let (status, orders) = admin_get(&app, "/api/admin/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let (status, order) = admin_get(&app, "/api/admin/orders/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["id"], 1);

    let (status, body) = admin_get(&app, "/api/admin/orders/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
