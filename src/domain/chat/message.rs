//! Message entity for chat transcripts.
//!
//! Messages are immutable records of user/assistant exchanges.
//! Each message has a role, content, and timestamp.

use serde::{Deserialize, Serialize};

use super::ChatError;
use crate::domain::foundation::{MessageId, Timestamp};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The person chatting with their twin.
    User,
    /// The twin.
    Assistant,
}

/// An immutable message within a transcript.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is not blank (validated at construction)
/// - `timestamp` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
    role: Role,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a new message with the given role and content.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if content is empty or whitespace only
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, ChatError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ChatError::EmptyContent);
        }

        Ok(Self {
            id: MessageId::new(),
            content,
            role,
            timestamp: Timestamp::now(),
        })
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Result<Self, ChatError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Result<Self, ChatError> {
        Self::new(Role::Assistant, content)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_keeps_content_verbatim() {
        let msg = Message::user("  What did I say about Lisbon?  ").unwrap();
        assert_eq!(msg.content(), "  What did I say about Lisbon?  ");
        assert!(msg.is_user());
        assert!(!msg.is_assistant());
    }

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(Message::user(""), Err(ChatError::EmptyContent));
        assert_eq!(Message::user(" \t\n "), Err(ChatError::EmptyContent));
        assert_eq!(Message::assistant("   "), Err(ChatError::EmptyContent));
    }

    #[test]
    fn each_message_gets_its_own_id() {
        let a = Message::user("one").unwrap();
        let b = Message::user("one").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn role_serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn message_serializes_all_fields() {
        let msg = Message::assistant("Hi there").unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Hi there");
        assert!(json["id"].is_string());
        assert!(json["timestamp"].is_string());
    }
}
