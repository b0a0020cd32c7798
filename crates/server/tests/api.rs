//! Integration tests for the HTTP API
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot` against
//! the bundled sample catalog.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use catalog::Catalog;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Catalog::bundled().expect("bundled catalog loads");
    let state = ServerState::with_catalog(ServerConfig::default(), catalog);
    build_router(Arc::new(state))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

fn hospital_ids(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["hospital"]["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["catalog"]["procedures"], 8);
    assert_eq!(body["components"]["catalog"]["hospitals"], 5);
}

#[tokio::test]
async fn test_api_info_lists_search() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "CareCost Server");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "/api/v1/search"));
}

#[tokio::test]
async fn test_cash_search_sorted_by_price() {
    let (status, body) = post_json(
        "/api/v1/search",
        json!({"procedure": "72148", "zipCode": "10016"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["procedure"]["cpt_code"], "72148");
    assert_eq!(body["insurance"], "cash");
    assert_eq!(body["sort"], "price");
    assert_eq!(body["priceKind"], "cash");
    assert_eq!(body["total"], 5);
    assert_eq!(
        hospital_ids(&body),
        [
            "bronx-community",
            "east-harlem-general",
            "hudson-river-health",
            "brooklyn-heights-medical",
            "midtown-medical"
        ]
    );

    let first = &body["results"][0];
    assert_eq!(first["rank"], 1);
    assert_eq!(first["priceInfo"], json!({"type": "cash", "value": 950.0}));
    assert_eq!(first["formattedPrice"], "$950");
    assert_eq!(first["distance"], "medium");
    assert_eq!(first["distanceLabel"], "5-15 miles");
}

#[tokio::test]
async fn test_plan_search_returns_plan_range() {
    let (status, body) = post_json(
        "/api/v1/search",
        json!({"procedure": "72148", "zipCode": "10016", "insurance": "aetna", "plan": "PPO"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let midtown = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["hospital"]["id"] == "midtown-medical")
        .expect("midtown listed");
    assert_eq!(
        midtown["priceInfo"],
        json!({"type": "plan_range", "min": 800.0, "max": 1000.0, "planName": "PPO"})
    );
    assert_eq!(midtown["formattedPrice"], "$800 - $1,000");
    assert_eq!(midtown["distance"], "close");
}

#[tokio::test]
async fn test_get_search_with_sort() {
    let (status, body) =
        get("/api/v1/search?procedure=mri%20lumbar&zipCode=10016&sort=rating").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sort"], "rating");
    assert_eq!(
        hospital_ids(&body),
        [
            "hudson-river-health",
            "midtown-medical",
            "brooklyn-heights-medical",
            "east-harlem-general",
            "bronx-community"
        ]
    );
}

#[tokio::test]
async fn test_unmatched_search_is_empty_not_error() {
    let (status, body) = post_json(
        "/api/v1/search",
        json!({"procedure": "zzz-no-such-code", "zipCode": "10001"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["procedure"].is_null());
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_invalid_queries_are_400() {
    let cases = [
        json!({"procedure": "72148", "zipCode": "123"}),
        json!({"procedure": "   ", "zipCode": "10001"}),
        json!({"procedure": "72148", "zipCode": "10001", "insurance": "acme"}),
        json!({"procedure": "72148", "zipCode": "10001", "sort": "cheapest"}),
    ];

    for payload in cases {
        let (status, body) = post_json("/api/v1/search", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["error"]["code"], "INVALID_QUERY");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = send(
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_procedure_suggestions_and_lookup() {
    let (status, body) = get("/api/v1/procedures?q=mri").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["procedures"][0]["cpt_code"], "72148");
    assert_eq!(body["procedures"][1]["cpt_code"], "70553");

    let (_, body) = get("/api/v1/procedures?q=imaging&limit=1").await;
    assert_eq!(body["total"], 1);

    let (status, body) = get("/api/v1/procedures/45378").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Colonoscopy, Diagnostic");

    let (status, body) = get("/api/v1/procedures/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_hospital_lookup() {
    let (status, body) = get("/api/v1/hospitals/hudson-river-health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zip"], "07030");
    assert!(body["prices"]["72148"].is_object());
    let score = body["confidenceScore"].as_u64().unwrap();
    assert!((50..=95).contains(&score));

    let (status, _) = get("/api/v1/hospitals/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_insurance_listing() {
    let (status, body) = get("/api/v1/insurance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cash"], "cash");

    let providers = body["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 5);
    let bcbs = providers.iter().find(|p| p["id"] == "bcbs").unwrap();
    assert_eq!(bcbs["label"], "Blue Cross Blue Shield");
    assert_eq!(bcbs["plans"], json!(["PPO", "HMO", "POS"]));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = app()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route_is_404_json() {
    let (status, body) = get("/api/v1/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
