use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct HelloResponse {
    message: String,
    status: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// Frontend-backend connectivity checks
async fn ping() -> &'static str {
    "pong"
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from ShiftSync!".to_string(),
        status: "success".to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/ping", get(ping))
        .route("/api/hello", get(hello))
}
