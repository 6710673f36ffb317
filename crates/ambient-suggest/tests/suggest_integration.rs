//! Integration tests for the suggestion client using wiremock.

use ambient_suggest::{SuggestClient, SuggestMode, Suggestions};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn general_category_returns_a_paragraph() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suggestions"))
        .and(body_partial_json(serde_json::json!({
            "temperature": 21.5,
            "humidity": 55.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": "Open a window; it is mild outside."
        })))
        .mount(&mock_server)
        .await;

    let client = SuggestClient::new(&mock_server.uri()).unwrap();
    let result = client.fetch(SuggestMode::General, 21.5, 55.0).await.unwrap();

    assert_eq!(
        result,
        Suggestions::Paragraph("Open a window; it is mild outside.".to_string())
    );
}

#[tokio::test]
async fn kids_category_sends_mode_and_returns_a_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suggestions"))
        .and(body_partial_json(serde_json::json!({"mode": "kids"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": ["Drink water", "Play inside"]
        })))
        .mount(&mock_server)
        .await;

    let client = SuggestClient::new(&mock_server.uri()).unwrap();
    let result = client.fetch(SuggestMode::Kids, 30.0, 40.0).await.unwrap();

    assert_eq!(
        result,
        Suggestions::List(vec!["Drink water".to_string(), "Play inside".to_string()])
    );
}

#[tokio::test]
async fn oversized_lists_are_truncated_to_five() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": ["a", "b", "c", "d", "e", "f", "g"]
        })))
        .mount(&mock_server)
        .await;

    let client = SuggestClient::new(&mock_server.uri()).unwrap();
    let result = client.fetch(SuggestMode::Pets, 22.0, 50.0).await.unwrap();

    match result {
        Suggestions::List(items) => assert_eq!(items.len(), 5),
        other => panic!("expected a list, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suggestions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = SuggestClient::new(&mock_server.uri()).unwrap();
    assert!(client.fetch(SuggestMode::General, 22.0, 50.0).await.is_err());
}

#[tokio::test]
async fn malformed_body_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": 42
        })))
        .mount(&mock_server)
        .await;

    let client = SuggestClient::new(&mock_server.uri()).unwrap();
    assert!(client.fetch(SuggestMode::General, 22.0, 50.0).await.is_err());
}
