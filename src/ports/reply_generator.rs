//! Reply Generator Port - Produces the twin's answer to a user message.
//!
//! The shipped adapter picks a canned sentence at random; a real inference
//! backend would plug in here without touching the chat flow.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoGenerator;
//!
//! #[async_trait]
//! impl ReplyGenerator for EchoGenerator {
//!     async fn generate(&self, user_text: &str) -> String {
//!         format!("You said: {}", user_text)
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Port for producing assistant replies.
///
/// Generation never fails: the simulated twin always answers.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Returns the reply to `user_text`. Implementations may ignore the input.
    async fn generate(&self, user_text: &str) -> String;
}
