//! Chat error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the chat transcript and simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// A reply was requested but no user message is waiting for one.
    #[error("No user message is waiting for a reply")]
    NoPendingReply,
}

impl From<ChatError> for DomainError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyContent => DomainError::new(ErrorCode::EmptyMessage, err.to_string())
                .with_detail("field", "content"),
            ChatError::NoPendingReply => DomainError::new(ErrorCode::NoPendingReply, err.to_string()),
        }
    }
}
