//! Tests for card procedures over HTTP.

mod common;

use common::{card_json, mock_error, mock_result, setup};
use llamavocs_client::{CreateInput, Error, GetAllInput, GetOneInput};
use llamavocs_rpc::ErrorCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_newest_sends_empty_input() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getOne"))
        .and(query_param("input", "{}"))
        .respond_with(mock_result(card_json("c2", "adiós", "goodbye", "es")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client.cards().newest().await.unwrap().unwrap();
    assert_eq!(card.id.as_str(), "c2");
    assert_eq!(card.front, "adiós");
    assert_eq!(card.back, "goodbye");
    assert_eq!(card.difficulty.get(), 1);
}

#[tokio::test]
async fn test_get_by_id_sends_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getOne"))
        .and(query_param("input", r#"{"id":"c1"}"#))
        .respond_with(mock_result(card_json("c1", "hola", "hello", "es")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client.cards().get("c1").await.unwrap().unwrap();
    assert_eq!(card.id.as_str(), "c1");
}

#[tokio::test]
async fn test_get_one_null_result_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getOne"))
        .respond_with(mock_result(serde_json::Value::Null))
        .expect(1)
        .mount(&server)
        .await;

    let card = client
        .cards()
        .get_one(GetOneInput::by_id("nonexistent"))
        .await
        .unwrap();
    assert!(card.is_none());
}

#[tokio::test]
async fn test_get_all_sends_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getAll"))
        .and(query_param("input", r#"{"language":"es","limit":2}"#))
        .respond_with(mock_result(json!([
            card_json("c3", "gato", "cat", "es"),
            card_json("c2", "perro", "dog", "es"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let cards = client
        .cards()
        .get_all(GetAllInput::new().language("es").limit(2))
        .await
        .unwrap();

    let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c3", "c2"]);
}

#[tokio::test]
async fn test_get_all_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getAll"))
        .respond_with(mock_result(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let cards = client.cards().get_all(GetAllInput::default()).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_create_posts_input() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rpc/card.create"))
        .and(body_json(json!({
            "front": "hola",
            "back": "hello",
            "language": "es",
            "difficulty": 3
        })))
        .respond_with(mock_result(card_json("c1", "hola", "hello", "es")))
        .expect(1)
        .mount(&server)
        .await;

    let card = client
        .cards()
        .create(CreateInput::new("hola", "hello", "es").difficulty(3))
        .await
        .unwrap();
    assert_eq!(card.front, "hola");
}

#[tokio::test]
async fn test_validation_error_is_remote() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rpc/card.create"))
        .respond_with(mock_error(
            400,
            "BAD_REQUEST",
            "invalid input: front: String must contain at least 1 character(s)",
            json!([{ "path": "front", "message": "String must contain at least 1 character(s)" }]),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .cards()
        .create(CreateInput::new("", "x", "en"))
        .await
        .unwrap_err();

    match err {
        Error::Remote(err) => {
            assert_eq!(err.code, ErrorCode::BadRequest);
            assert_eq!(err.issues.len(), 1);
            assert_eq!(err.issues[0].path, "front");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_store_failure_message_passes_through() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getOne"))
        .respond_with(mock_error(
            500,
            "INTERNAL_SERVER_ERROR",
            "database is locked",
            json!([]),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.cards().newest().await.unwrap_err();
    assert_eq!(err.to_string(), "database is locked");
}

#[tokio::test]
async fn test_missing_result_on_mutation_is_empty_response() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rpc/card.create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .cards()
        .create(CreateInput::new("hola", "hello", "es"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_card_is_json_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rpc/card.getOne"))
        .respond_with(mock_result(json!({ "id": "c1", "front": "hola" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.cards().newest().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let client = llamavocs_client::LlamaClient::builder()
        .url("http://127.0.0.1:1")
        .build();

    let err = client.cards().newest().await.unwrap_err();
    assert!(matches!(err, Error::ConnectionRefused));
}
