use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::test_server;

#[tokio::test]
async fn test_ping_answers_pong() {
    let server = test_server();

    let response = server.get("/api/ping").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "pong");
}

#[tokio::test]
async fn test_hello_answers_with_message_and_status() {
    let server = test_server();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Hello from ShiftSync!");
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
