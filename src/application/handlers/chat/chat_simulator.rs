//! ChatSimulator - One chat session with the twin.
//!
//! Sending a message happens in two phases:
//!
//! 1. `submit` appends the user message immediately and the twin starts "typing"
//! 2. `deliver_reply` waits the simulated delay, then appends the reply
//!
//! `send` runs both. Each accepted message gets exactly one non-blank reply,
//! in submission order.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{CannedReplyGenerator, TokioDelay};
use crate::config::SimulationConfig;
use crate::domain::chat::{ChatError, ChatTranscript, Message, CANNED_REPLIES};
use crate::domain::foundation::MessageId;
use crate::ports::{Delay, ReplyGenerator};

/// Result of a full send (user message plus reply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResult {
    /// ID of the user message.
    pub user_message_id: MessageId,
    /// ID of the twin's reply.
    pub assistant_message_id: MessageId,
}

/// Holds the transcript of one chat session.
pub struct ChatSimulator {
    transcript: ChatTranscript,
    generator: Arc<dyn ReplyGenerator>,
    delay: Arc<dyn Delay>,
    reply_delay: Duration,
    awaiting_reply: VecDeque<String>,
}

impl ChatSimulator {
    /// Opens a session with the twin's greeting.
    pub fn new(
        generator: Arc<dyn ReplyGenerator>,
        delay: Arc<dyn Delay>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            transcript: ChatTranscript::with_greeting(),
            generator,
            delay,
            reply_delay,
            awaiting_reply: VecDeque::new(),
        }
    }

    /// Opens a session wired to the canned generator and a real-time delay.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            Arc::new(CannedReplyGenerator::from_seed(config.rng_seed)),
            Arc::new(TokioDelay),
            config.reply_delay(),
        )
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// True while at least one message is waiting for its reply.
    pub fn is_typing(&self) -> bool {
        !self.awaiting_reply.is_empty()
    }

    /// Number of messages still waiting for a reply.
    pub fn pending_replies(&self) -> usize {
        self.awaiting_reply.len()
    }

    /// Appends a user message without waiting for the reply.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if `text` is blank; nothing is appended and no
    ///   reply is scheduled
    pub fn submit(&mut self, text: &str) -> Result<MessageId, ChatError> {
        let message = match Message::user(text) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!("Ignoring blank chat input");
                return Err(err);
            }
        };

        let id = *self.transcript.append(message).id();
        self.awaiting_reply.push_back(text.to_string());
        tracing::debug!(message_id = %id, pending = self.awaiting_reply.len(), "User message appended");
        Ok(id)
    }

    /// Waits the reply delay and appends the twin's reply to the oldest
    /// unanswered message. A blank reply from the generator is replaced by
    /// the first canned sentence.
    ///
    /// # Errors
    ///
    /// - `NoPendingReply` if every message has already been answered
    pub async fn deliver_reply(&mut self) -> Result<MessageId, ChatError> {
        let user_text = self
            .awaiting_reply
            .front()
            .cloned()
            .ok_or(ChatError::NoPendingReply)?;

        self.delay.wait(self.reply_delay).await;
        let mut content = self.generator.generate(&user_text).await;
        if content.trim().is_empty() {
            tracing::warn!("Reply generator returned blank text, using canned reply");
            content = CANNED_REPLIES[0].to_string();
        }
        let reply = Message::assistant(content)?;

        self.awaiting_reply.pop_front();
        let id = *self.transcript.append(reply).id();
        tracing::debug!(message_id = %id, "Assistant reply appended");
        Ok(id)
    }

    /// Submits `text` and waits for the twin's reply.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if `text` is blank (no-op)
    pub async fn send(&mut self, text: &str) -> Result<SendMessageResult, ChatError> {
        let user_message_id = self.submit(text)?;
        let assistant_message_id = self.deliver_reply().await?;

        tracing::info!(
            transcript_len = self.transcript.len(),
            "Chat exchange completed"
        );

        Ok(SendMessageResult {
            user_message_id,
            assistant_message_id,
        })
    }
}
