//! Shared fixtures for integration tests.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

/// Starts a fixture API on an ephemeral port and returns its address.
///
/// Routes:
/// - `GET /ok` -> 200 `{"status":"ok"}`
/// - `GET /text` -> 200 `OK` (plain text)
/// - `GET /missing` -> 404 `{"error":"not found"}`
/// - `GET /slow` -> 200 after 5 seconds
/// - `POST /items` -> 201 `{"id":7}`
pub async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { Json(json!({"status": "ok"})) }))
        .route("/text", get(|| async { "OK" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))) }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"status": "late"}))
            }),
        )
        .route(
            "/items",
            post(|| async { (StatusCode::CREATED, Json(json!({"id": 7}))) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server failed");
    });

    addr
}

/// Returns an address on which nothing is listening.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Builds a test case document for `verb` against `url`.
pub fn case_json(verb: &str, url: &str) -> serde_json::Value {
    json!({
        "test_info": {
            "id": "t1",
            "description": "fixture check",
            "version": "1",
            "date_uploaded": "2024-03-03",
            "author": "qa"
        },
        "request": {
            "verb": verb,
            "url": url,
            "payload": {
                "headers": [{"header": "X-Trace", "value": "abc"}],
                "body": "{\"unused\":true}"
            }
        },
        "expect": {
            "parse_as": "json",
            "http_code": 200,
            "max_latency_ms": 1000,
            "headers": [{"header": "content-type", "value": "application/json"}],
            "body": {"status": "ok"}
        }
    })
}
