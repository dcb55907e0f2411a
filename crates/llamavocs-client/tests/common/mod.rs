//! Common test utilities for client tests.

use llamavocs_client::LlamaClient;
use serde::Serialize;
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, LlamaClient) {
    let server = MockServer::start().await;
    let client = LlamaClient::builder().url(server.uri()).build();
    (server, client)
}

/// A successful procedure response.
pub fn mock_result<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "result": result }))
}

/// A failed procedure response.
#[allow(dead_code)] // Not all test files use this
pub fn mock_error(status: u16, code: &str, message: &str, issues: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {
            "code": code,
            "message": message,
            "issues": issues
        }
    }))
}

/// A card as the server serializes it.
pub fn card_json(id: &str, front: &str, back: &str, language: &str) -> Value {
    json!({
        "id": id,
        "front": front,
        "back": back,
        "language": language,
        "difficulty": 1,
        "createdAt": "2024-03-05T10:00:00Z"
    })
}
