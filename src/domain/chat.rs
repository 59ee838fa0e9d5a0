// src/domain/chat.rs
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One chat-completion call: credentials, model and the ordered messages.
#[derive(Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub api_key: String,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

// Keeps the API key out of debug logs.
impl fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRequest")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("messages", &self.messages)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_request_when_debug_formatting_then_hides_api_key() {
        let request = ChatRequest {
            api_key: "sk-secret".to_string(),
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::user("hello")],
        };

        let debug = format!("{:?}", request);

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4"));
    }

    #[test]
    fn given_message_when_serializing_then_uses_lowercase_role() {
        let json = serde_json::to_string(&ChatMessage::system("be brief")).unwrap();

        assert_eq!(json, r#"{"role":"system","content":"be brief"}"#);
    }
}
