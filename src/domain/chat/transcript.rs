//! ChatTranscript - Append-only message history for one chat session.

use serde::Serialize;

use super::{replies::GREETING, ChatError, Message, Role};

/// Ordered messages of a single session.
///
/// Messages can only be appended; the transcript is dropped with its session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatTranscript {
    messages: Vec<Message>,
}

impl ChatTranscript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transcript opened by the twin's greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        // GREETING is a non-blank constant.
        if let Ok(greeting) = Message::assistant(GREETING) {
            transcript.append(greeting);
        }
        transcript
    }

    /// Appends a message at the end.
    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Builds and appends a message.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if content is blank; the transcript is left unchanged
    pub fn record(&mut self, role: Role, content: impl Into<String>) -> Result<&Message, ChatError> {
        let message = Message::new(role, content)?;
        Ok(self.append(message))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Number of messages written by `role`.
    pub fn count_by(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role() == role).count()
    }
}
