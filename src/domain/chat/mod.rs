//! Chat module - Messages exchanged with the twin.
//!
//! - `Message` - immutable user/assistant message
//! - `ChatTranscript` - append-only history of one session
//! - `replies` - greeting and canned replies

mod errors;
mod message;
pub mod replies;
mod transcript;

pub use errors::ChatError;
pub use message::{Message, Role};
pub use replies::{CANNED_REPLIES, GREETING};
pub use transcript::ChatTranscript;
