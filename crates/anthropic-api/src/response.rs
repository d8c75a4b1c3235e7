use crate::message::{Content, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

/// A completion result from the Messages API, returned to relay callers
/// re-serialized without modification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub id: String,
    pub r#type: String,
    pub role: Role,
    pub content: Vec<Content>,
    pub model: String,
    pub stop_reason: Option<StopReason>,
    pub stop_sequence: Option<String>,
    pub usage: Usage,
}

impl ChatResponse {
    pub fn text_content(&self) -> Vec<&str> {
        self.content
            .iter()
            .filter_map(|content| {
                let Content::Text(text) = content;
                Some(text.as_str())
            })
            .collect()
    }
}

impl std::fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChatResponse {{ id: {}, type: {}, role: {:?}, model: {}, text: [{}] }}",
            self.id,
            self.r#type,
            self.role,
            self.model,
            self.text_content().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Text;

    fn sample_response_json() -> &'static str {
        r#"{
            "id": "msg_013Zva2CMHLNnXjNJJKqJ2EF",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "Hello!"}],
            "model": "claude-3-5-sonnet-20241022",
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 10, "output_tokens": 25}
        }"#
    }

    #[test]
    fn test_deserialize_api_response() {
        let response: ChatResponse = serde_json::from_str(sample_response_json()).unwrap();
        assert_eq!(response.r#type, "message");
        assert_eq!(response.role, Role::Assistant);
        assert_eq!(response.model, "claude-3-5-sonnet-20241022");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.usage.output_tokens, Some(25));
        assert_eq!(response.text_content(), vec!["Hello!"]);
    }

    #[test]
    fn test_reserialization_preserves_shape() {
        let response: ChatResponse = serde_json::from_str(sample_response_json()).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "Hello!");
        assert_eq!(value["stop_reason"], "end_turn");
    }

    #[test]
    fn test_text_content_multiple_blocks() {
        let response = ChatResponse {
            id: "test_id".to_string(),
            r#type: "message".to_string(),
            role: Role::Assistant,
            content: vec![
                Content::Text(Text::new("part one")),
                Content::Text(Text::new("part two")),
            ],
            model: "claude-3-5-sonnet-20241022".to_string(),
            stop_reason: Some(StopReason::EndTurn),
            stop_sequence: None,
            usage: Usage::default(),
        };
        assert_eq!(response.text_content(), vec!["part one", "part two"]);
    }
}
