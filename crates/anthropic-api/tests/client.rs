use anthropic_api::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message_response() -> serde_json::Value {
    json!({
        "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": "Hello!"}],
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 12, "output_tokens": 6}
    })
}

#[tokio::test]
async fn send_posts_messages_with_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-5-sonnet-20241022",
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Anthropic::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build();

    let request = ChatRequest::builder()
        .model("claude-3-5-sonnet-20241022")
        .messages(vec![Message::from("Hello")])
        .build();

    let response = client.send(&request).await.expect("request should succeed");
    assert_eq!(response.model, "claude-3-5-sonnet-20241022");
    assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    assert_eq!(response.text_content(), vec!["Hello!"]);
}

#[tokio::test]
async fn send_maps_api_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let client = Anthropic::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build();

    let request = ChatRequest::builder()
        .model("claude-3-5-sonnet-20241022")
        .messages(vec![Message::from("Hello")])
        .build();

    let error = client.send(&request).await.expect_err("should fail");
    assert!(matches!(error, AnthropicRequestError::Overloaded(_)));
    assert_eq!(error.to_string(), "API overloaded: Overloaded");
}

#[tokio::test]
async fn send_maps_plain_text_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("kaboom"))
        .mount(&server)
        .await;

    let client = Anthropic::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build();

    let request = ChatRequest::builder()
        .model("claude-3-5-sonnet-20241022")
        .messages(vec![Message::from("Hello")])
        .build();

    let error = client.send(&request).await.expect_err("should fail");
    assert_eq!(
        error.to_string(),
        "Unexpected response from API: HTTP status 500: kaboom"
    );
}

#[test]
fn debug_redacts_api_key() {
    let client = Anthropic::new("super-secret");
    let debug = format!("{client:?}");
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("super-secret"));
}
