//! Prompt - System + user message pair sent to the language model

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Prompt - exactly one system instruction followed by one user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    system: ChatMessage,
    user: ChatMessage,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: ChatMessage::system(system),
            user: ChatMessage::user(user),
        }
    }

    pub fn system(&self) -> &str {
        &self.system.content
    }

    pub fn user(&self) -> &str {
        &self.user.content
    }

    /// Messages in send order
    pub fn messages(&self) -> [&ChatMessage; 2] {
        [&self.system, &self.user]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_in_order() {
        let prompt = Prompt::new("be terse", "hello");
        let [first, second] = prompt.messages();

        assert_eq!(first.role, MessageRole::System);
        assert_eq!(first.content, "be terse");
        assert_eq!(second.role, MessageRole::User);
        assert_eq!(second.content, "hello");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Prompt::new("x", "y").messages()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "x"},
                {"role": "user", "content": "y"}
            ])
        );
        assert!(serde_json::from_value::<MessageRole>(serde_json::json!("assistant")).is_err());
    }
}
