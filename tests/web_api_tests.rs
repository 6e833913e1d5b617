//! Integration tests for the Resistor Bands Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use resistor_bands::web::{create_router, AppState};

/// Creates the router around the embedded catalog.
fn create_test_app() -> axum::Router {
    let state = AppState::new().expect("Failed to create app state");
    create_router(state)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to POST a raw body with an optional content type.
async fn post_raw(
    app: &axum::Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().expect("expected a number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Color Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_colors() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/colors").await;

    assert_eq!(status, StatusCode::OK);
    let colors = json.as_array().unwrap();
    assert_eq!(colors.len(), 12);
    assert_eq!(colors[0], "black");
    assert_eq!(colors[11], "silver");
}

#[tokio::test]
async fn test_every_listed_color_resolves() {
    let app = create_test_app();

    let (_, json) = get_json(&app, "/colors").await;
    for color in json.as_array().unwrap() {
        let uri = format!("/colors/{}", color.as_str().unwrap());
        let (status, _) = get_json(&app, &uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_get_color() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/colors/gold").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"value": 0, "multiplier": -1, "tolerance": 0.05}));
}

#[tokio::test]
async fn test_get_color_case_insensitive() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/colors/ViOLeT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 7);
    assert_eq!(json["multiplier"], 7);
}

#[tokio::test]
async fn test_get_color_not_found() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/colors/notacolor").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("notacolor"));
}

// ============================================================================
// Resistor Endpoint Tests (POST)
// ============================================================================

#[tokio::test]
async fn test_post_four_band() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "red",
            "secondBand": "red",
            "multiplier": "brown",
            "tolerance": "gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 220.0);
    assert_close(&json["tolerance"], 0.05);
}

#[tokio::test]
async fn test_post_five_band() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "brown",
            "secondBand": "black",
            "thirdBand": "black",
            "multiplier": "black",
            "tolerance": "brown"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 100.0);
    assert_close(&json["tolerance"], 0.01);
}

#[tokio::test]
async fn test_post_null_third_band_is_four_band() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "brown",
            "secondBand": "black",
            "thirdBand": null,
            "multiplier": "black",
            "tolerance": "brown"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 10.0);
}

#[tokio::test]
async fn test_post_fractional_multiplier() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "red",
            "secondBand": "red",
            "multiplier": "gold",
            "tolerance": "gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 2.2);
}

#[tokio::test]
async fn test_post_unknown_color() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "red",
            "secondBand": "mauve",
            "multiplier": "brown",
            "tolerance": "gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["details"].as_str().unwrap().contains("mauve"));
    assert!(json.get("value").is_none());
}

#[tokio::test]
async fn test_post_missing_required_field() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": "red",
            "secondBand": "red",
            "tolerance": "gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"], "multiplier");
}

#[tokio::test]
async fn test_post_malformed_json() {
    let app = create_test_app();

    let (status, json) = post_raw(
        &app,
        "/resistors/value-from-bands",
        Some("application/json"),
        r#"{"firstBand": "red", "#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_post_non_string_field() {
    let app = create_test_app();

    let (status, json) = post_json(
        &app,
        "/resistors/value-from-bands",
        json!({
            "firstBand": 5,
            "secondBand": "red",
            "multiplier": "brown",
            "tolerance": "gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn test_post_without_content_type() {
    let app = create_test_app();

    let (status, json) = post_raw(
        &app,
        "/resistors/value-from-bands",
        None,
        r#"{"firstBand":"red","secondBand":"red","multiplier":"brown","tolerance":"gold"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

// ============================================================================
// Resistor Endpoint Tests (GET)
// ============================================================================

#[tokio::test]
async fn test_get_four_band() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/resistors/value-from-bands?firstBand=brown&secondBand=black&multiplier=black&tolerance=brown",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 10.0);
    assert_close(&json["tolerance"], 0.01);
}

#[tokio::test]
async fn test_get_five_band() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/resistors/value-from-bands?firstBand=Yellow&secondBand=Violet&thirdBand=Black&multiplier=Brown&tolerance=Silver",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 4700.0);
    assert_close(&json["tolerance"], 0.1);
}

#[tokio::test]
async fn test_get_gold_as_digit_band() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/resistors/value-from-bands?firstBand=gold&secondBand=red&multiplier=brown&tolerance=gold",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["value"], 20.0);
}

#[tokio::test]
async fn test_get_unknown_color() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/resistors/value-from-bands?firstBand=red&secondBand=red&multiplier=brown&tolerance=plaid",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_missing_query_parameter() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/resistors/value-from-bands?secondBand=red&multiplier=brown&tolerance=gold",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"], "firstBand");
}
