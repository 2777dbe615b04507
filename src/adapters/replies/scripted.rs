//! Scripted reply generator for testing.
//!
//! Returns pre-configured replies in order and records every prompt it
//! was asked to answer.
//!
//! # Example
//!
//! ```ignore
//! let generator = ScriptedReplyGenerator::new()
//!     .with_reply("First answer")
//!     .with_reply("Second answer");
//!
//! assert_eq!(generator.generate("q1").await, "First answer");
//! assert_eq!(generator.prompts(), vec!["q1".to_string()]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::ReplyGenerator;

const FALLBACK_REPLY: &str = "Scripted reply";

/// Reply generator that plays back a fixed script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReplyGenerator {
    replies: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedReplyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(reply.into());
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl ReplyGenerator for ScriptedReplyGenerator {
    async fn generate(&self, user_text: &str) -> String {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(user_text.to_string());

        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}
