use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use rms_backend::{store::EntityStore, AppState};

fn init_env() {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var(
        "SESSION_DIR",
        env::temp_dir().join("rms-test-sessions").display().to_string(),
    );
    env::set_var("TOKEN_TTL_HOURS", "24");
    let _ = rms_backend::config::init_config();
}

fn app() -> Router {
    init_env();
    let store = Arc::new(EntityStore::seeded().expect("seeded store"));
    rms_backend::router(AppState::new(store))
}

async fn body_json(response: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": "admin@example.com", "password": "admin123"}).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .expect("token")
        .to_string()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request")
}

fn search(token: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/suppliers/search")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn list_returns_the_seeded_suppliers() {
    let app = app();
    let token = login(&app).await;
    let response = app.oneshot(get("/api/suppliers", &token)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn unknown_supplier_is_not_found() {
    let app = app();
    let token = login(&app).await;
    let response = app
        .oneshot(get("/api/suppliers/42", &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delivery_window_labels_select_buckets() {
    let app = app();
    let token = login(&app).await;
    let response = app
        .oneshot(search(
            &token,
            json!({
                "filters": {"deliveryTime": ["1-3 Days", "1-2 Weeks"]},
                "sort": "Delivery Time (Fast to Slow)"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // FastFreight (1 day), TechSupply (3 days), OfficeEssentials (14 days).
    assert_eq!(body["total"], 3);
    let names: Vec<&str> = body["results"]
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["FastFreight Ltd.", "TechSupply Inc.", "OfficeEssentials"]);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let app = app();
    let token = login(&app).await;
    let response = app
        .oneshot(search(
            &token,
            json!({
                "filters": {"priceRange": {"min": "75.00", "max": "200.00"}},
                "sort": "Price (Low to High)"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    let names: Vec<&str> = body["results"]
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["GreenGoods Co.", "TechSupply Inc.", "FastFreight Ltd."]);
}

#[tokio::test]
async fn quality_range_and_search_text_conjoin() {
    let app = app();
    let token = login(&app).await;
    let response = app
        .oneshot(search(
            &token,
            json!({
                "query": "supply",
                "filters": {"qualityRange": {"min": 80, "max": 100}}
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["results"][0]["name"], "TechSupply Inc.");
}

#[tokio::test]
async fn default_sort_is_quality_descending() {
    let app = app();
    let token = login(&app).await;
    let response = app
        .oneshot(search(&token, json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let qualities: Vec<i64> = body["results"]
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["quality"].as_i64().expect("quality"))
        .collect();
    assert_eq!(qualities, vec![95, 92, 85, 78, 65]);
}
