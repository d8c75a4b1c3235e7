use crate::message::{Message, Messages, StringOrContents};
use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(builder_type(vis = "pub"), state_mod(vis = "pub"))]
pub struct ChatRequest {
    #[builder(field)]
    pub messages: Messages,
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<StringOrContents>,
    #[builder(default = 4096)]
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl<S: chat_request_builder::State> ChatRequestBuilder<S> {
    pub fn messages(mut self, messages: impl IntoIterator<Item = impl Into<Message>>) -> Self {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl ChatRequest {
    pub fn push_message(&mut self, message: impl Into<Message>) {
        self.messages.push(message.into());
    }

    /// Set temperature for response randomness (0.0 to 1.0)
    pub fn temp(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    #[test]
    fn test_default_max_tokens() {
        let request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .messages(vec![Message::from("Hello")])
            .build();
        assert_eq!(request.max_tokens, 4096);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .messages(vec![Message::from("Hello")])
            .build();

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("system"));
        assert!(!json.contains("temperature"));
        assert!(!json.contains("stop_sequences"));
    }

    #[test]
    fn test_system_serialized_as_string() {
        let request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .system("You are a helpful assistant.")
            .messages(vec![Message::from("Hello")])
            .build();

        let json: serde_json::Value =
            serde_json::to_value(&request).unwrap();
        assert_eq!(json["system"], "You are a helpful assistant.");
    }

    #[test]
    fn test_message_accumulation() {
        let request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .message(Message::user("first"))
            .message(Message::assistant("second"))
            .build();
        assert_eq!(request.messages.len(), 2);
    }

    #[test]
    fn test_push_message_appends() {
        let mut request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .messages(vec![Message::user("first")])
            .build();
        request.push_message(Message::assistant("second"));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages.last().unwrap().content.text(), "second");
    }

    #[test]
    fn test_temperature_setter() {
        let request = ChatRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .messages(vec![Message::from("Hello")])
            .build()
            .temp(0.7);
        assert_eq!(request.temperature, Some(0.7));
    }
}
