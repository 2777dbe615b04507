//! Canned reply generator.
//!
//! Picks one of a fixed set of sentences uniformly at random. The pick is
//! never influenced by what the user wrote.
//!
//! # Example
//!
//! ```ignore
//! // Reproducible picks for tests
//! let generator = CannedReplyGenerator::seeded(42);
//! let reply = generator.generate("anything").await;
//! assert!(is_canned_reply(&reply));
//! ```

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::domain::chat::CANNED_REPLIES;
use crate::ports::ReplyGenerator;

/// Reply generator backed by a seedable RNG.
pub struct CannedReplyGenerator {
    replies: Vec<String>,
    rng: Mutex<StdRng>,
}

impl CannedReplyGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator whose picks are fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            replies: CANNED_REPLIES.iter().map(|r| r.to_string()).collect(),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the reply set. An empty set keeps the current replies.
    pub fn with_replies<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies: Vec<String> = replies
            .into_iter()
            .map(|r| -> String { r.into() })
            .filter(|r| !r.trim().is_empty())
            .collect();
        if !replies.is_empty() {
            self.replies = replies;
        }
        self
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    fn pick_index(&self) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..self.replies.len())
    }
}

impl Default for CannedReplyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplyGenerator for CannedReplyGenerator {
    async fn generate(&self, _user_text: &str) -> String {
        let idx = self.pick_index();
        tracing::trace!(reply_index = idx, "Picked canned reply");
        self.replies[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::replies::is_canned_reply;
    use std::collections::HashSet;

    #[tokio::test]
    async fn replies_come_from_canned_set() {
        let generator = CannedReplyGenerator::new();
        for _ in 0..50 {
            let reply = generator.generate("hello").await;
            assert!(is_canned_reply(&reply), "unexpected reply: {}", reply);
        }
    }

    #[tokio::test]
    async fn same_seed_gives_same_sequence() {
        let a = CannedReplyGenerator::seeded(7);
        let b = CannedReplyGenerator::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.generate("x").await, b.generate("y").await);
        }
    }

    #[tokio::test]
    async fn user_text_does_not_influence_pick() {
        let a = CannedReplyGenerator::seeded(99);
        let b = CannedReplyGenerator::seeded(99);
        let from_question = a.generate("What is my favourite book?").await;
        let from_greeting = b.generate("hi").await;
        assert_eq!(from_question, from_greeting);
    }

    #[tokio::test]
    async fn all_replies_eventually_show_up() {
        let generator = CannedReplyGenerator::seeded(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(generator.generate("").await);
        }
        assert_eq!(seen.len(), CANNED_REPLIES.len());
    }

    #[tokio::test]
    async fn custom_replies_replace_defaults() {
        let generator = CannedReplyGenerator::seeded(3).with_replies(["Only answer"]);
        assert_eq!(generator.replies(), &["Only answer".to_string()]);
        assert_eq!(generator.generate("q").await, "Only answer");
    }

    #[test]
    fn blank_custom_replies_are_ignored() {
        let generator = CannedReplyGenerator::seeded(3).with_replies(["", "  "]);
        assert_eq!(generator.replies().len(), CANNED_REPLIES.len());
    }
}
