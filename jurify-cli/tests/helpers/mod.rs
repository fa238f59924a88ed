//! Test helpers: in-process mock of the JuriFy backend
//!
//! Stands up an axum server on an ephemeral port that mimics the five
//! endpoint groups well enough to exercise the REST client. The token
//! "test-token" is the only one the mock accepts.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Clone)]
pub struct MockState {
    /// Free-tier queries remaining for any client ID
    pub free_remaining: i64,
}

/// Start the mock backend; returns its base URL
pub async fn spawn_backend(free_remaining: i64) -> String {
    let state = Arc::new(MockState { free_remaining });

    let app = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/process", post(process))
        .route("/free/status", post(free_status))
        .route("/free/process", post(free_process))
        .route("/history", get(history_list))
        .route("/history/:id", get(history_item).delete(history_delete))
        .route("/xp", get(xp))
        .route("/cache/stats", get(cache_stats))
        .route("/cache/clear", post(cache_clear))
        .route("/cache/clear-expired", post(cache_clear))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid token"})),
    )
        .into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": "Email already registered"})),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({"message": "Registration successful", "user_id": 7})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        Json(json!({
            "token": TEST_TOKEN,
            "user": {"id": 1, "name": "Asha", "email": body["email"]}
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()
    }
}

fn advice_sections() -> Value {
    json!({
        "rights": "You are entitled to the return of your deposit.",
        "steps": "Send a written demand letter within 30 days.",
        "docs": "Lease agreement, payment receipts.",
        "notice": "NOTICE OF CLAIM\n\nTo whom it may concern..."
    })
}

async fn process(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    // Issues mentioning "cached" simulate a backend cache hit
    let from_cache = body["issue"]
        .as_str()
        .map(|s| s.contains("cached"))
        .unwrap_or(false);

    let mut advice = advice_sections();
    advice["from_cache"] = json!(from_cache);
    advice["history_id"] = json!(42);
    advice["xp_reward"] = json!(if from_cache { 2 } else { 10 });

    Json(advice).into_response()
}

async fn free_status(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if body["client_id"].as_str().unwrap_or("").is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Client ID required"})),
        )
            .into_response();
    }

    Json(json!({
        "daily_limit": 5,
        "used": 5 - state.free_remaining,
        "remaining": state.free_remaining,
        "reset_in_hours": 12.0
    }))
    .into_response()
}

async fn free_process(State(state): State<Arc<MockState>>, Json(_body): Json<Value>) -> Response {
    if state.free_remaining <= 0 {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Daily limit reached (5 queries/day).",
                "limit_reached": true,
                "reset_in_hours": 12.0
            })),
        )
            .into_response();
    }

    let mut advice = advice_sections();
    advice["from_cache"] = json!(true);
    advice["free_tier"] = json!(true);
    advice["queries_remaining"] = json!(state.free_remaining - 1);
    advice["daily_limit"] = json!(5);

    Json(advice).into_response()
}

fn history_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "user_id": 1,
            "issue": "Landlord kept my security deposit",
            "rights": "r", "steps": "s", "docs": "d", "notice": "n",
            "language": "en",
            "xp_reward": 10,
            "created_at": "2025-11-02T10:15:00"
        }),
        json!({
            "id": 2,
            "user_id": 1,
            "issue": "Employer withheld final paycheck",
            "rights": "r", "steps": "s", "docs": "d", "notice": "n",
            "language": "hi",
            "xp_reward": 15,
            "created_at": "2025-11-01T09:00:00"
        }),
    ]
}

async fn history_list(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    let rows = history_rows();
    let filtered: Vec<Value> = match params.get("search") {
        Some(term) => rows
            .into_iter()
            .filter(|row| {
                row["issue"]
                    .as_str()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            })
            .collect(),
        None => rows,
    };

    Json(Value::Array(filtered)).into_response()
}

async fn history_item(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    // Older rows were saved before the per-section columns existed
    if id == 3 {
        return Json(json!({
            "id": 3,
            "user_id": 1,
            "issue": "Old query saved before sections were stored",
            "rights": null, "steps": null, "docs": null, "notice": null,
            "language": "en",
            "xp_reward": 5,
            "created_at": "2025-10-20T08:00:00"
        }))
        .into_response();
    }

    match history_rows().into_iter().find(|row| row["id"] == id) {
        Some(row) => Json(row).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "History item not found"})),
        )
            .into_response(),
    }
}

async fn history_delete(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    if history_rows().iter().any(|row| row["id"] == id) {
        Json(json!({"message": "History item deleted"})).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "History item not found"})),
        )
            .into_response()
    }
}

async fn xp(headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    Json(json!({
        "total_xp": 235,
        "level": 2,
        "xp_in_level": 35,
        "query_count": 12,
        "badges": {"bronze": true, "silver": true, "gold": false, "diamond": false}
    }))
    .into_response()
}

async fn cache_stats() -> Response {
    Json(json!({
        "total_entries": 8,
        "total_hits": 21,
        "expired_entries": 2,
        "expiry_hours": 48
    }))
    .into_response()
}

async fn cache_clear(headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    Json(json!({"message": "Cache cleared. Deleted 3 entries.", "deleted": 3})).into_response()
}
