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

async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": email, "password": password}).to_string(),
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

fn send_json(method: &str, uri: &str, token: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn list_returns_the_seeded_candidates() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app.oneshot(get("/api/candidates", &token)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("array").len(), 7);
}

#[tokio::test]
async fn unknown_candidate_is_not_found() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(get("/api/candidates/999", &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_conjoins_filters_and_uses_dropdown_sort_labels() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/candidates/search",
            &token,
            json!({
                "filters": {
                    "department": ["Engineering"],
                    "status": ["Interviewing", "Screening"]
                },
                "sort": "Name A-Z"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    let names: Vec<&str> = body["results"]
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["David Kim", "Sarah Johnson"]);
}

#[tokio::test]
async fn empty_search_body_is_the_identity_pipeline() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(send_json("POST", "/api/candidates/search", &token, json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 7);
    // Default sort is newest application first.
    assert_eq!(body["results"][0]["name"], "Emily Rodriguez");
}

#[tokio::test]
async fn note_create_update_delete_flow() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;

    let created = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/candidates/2/notes",
            &token,
            json!({"content": "Strong product sense in the screening call."}),
        ))
        .await
        .expect("response");
    assert_eq!(created.status(), StatusCode::CREATED);
    let note = body_json(created).await;
    let note_id = note["id"].as_i64().expect("id");
    assert_eq!(note["createdByName"], "Admin User");
    assert!(note["updatedAt"].is_null());

    let updated = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/api/candidates/2/notes/{}", note_id),
            &token,
            json!({"content": "Revised after the panel debrief."}),
        ))
        .await
        .expect("response");
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["content"], "Revised after the panel debrief.");
    assert!(!updated["updatedAt"].is_null());

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/candidates/2/notes/{}", note_id))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let listed = app
        .oneshot(get("/api/candidates/2/notes", &token))
        .await
        .expect("response");
    assert_eq!(body_json(listed).await.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn blank_note_content_is_rejected() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(send_json(
            "POST",
            "/api/candidates/1/notes",
            &token,
            json!({"content": "   "}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn only_the_author_may_edit_a_note() {
    let app = app();
    // Seeded note 2 on candidate 1 was written by Jane Smith.
    let admin_token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(send_json(
            "PUT",
            "/api/candidates/1/notes/2",
            &admin_token,
            json!({"content": "tampering with someone else's note"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn communication_duration_is_dropped_for_non_calls() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;

    let email = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/candidates/1/communications",
            &token,
            json!({
                "type": "email",
                "subject": "Offer details",
                "content": "Please find the offer attached.",
                "duration": "25 minutes"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(email.status(), StatusCode::CREATED);
    let email = body_json(email).await;
    assert!(email["duration"].is_null());

    let call = app
        .oneshot(send_json(
            "POST",
            "/api/candidates/1/communications",
            &token,
            json!({
                "type": "call",
                "subject": "Final round debrief",
                "content": "Walked through compensation expectations.",
                "duration": "15 minutes"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(call.status(), StatusCode::CREATED);
    let call = body_json(call).await;
    assert_eq!(call["duration"], "15 minutes");
    assert_eq!(call["sentByName"], "Admin User");
}

#[tokio::test]
async fn documents_are_scoped_to_the_candidate() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;

    let response = app
        .clone()
        .oneshot(get("/api/candidates/1/documents", &token))
        .await
        .expect("response");
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 4);

    let response = app
        .oneshot(get("/api/candidates/2/documents", &token))
        .await
        .expect("response");
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn dashboard_stats_track_the_live_collection() {
    let app = app();
    let token = login(&app, "admin@example.com", "admin123").await;
    let response = app
        .oneshot(get("/api/dashboard/stats", &token))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // Seven seeded candidates, one hired, one rejected.
    assert_eq!(body["totalCandidates"], 7);
    assert_eq!(body["activePositions"], 5);
    assert_eq!(body["hired"], 1);
    assert_eq!(body["candidatesChange"], "+5%");
}
