//! Adapters - Implementations of port interfaces.
//!
//! - `replies` - Canned (random) and scripted reply generators
//! - `delay` - Real-time and recording delays

pub mod delay;
pub mod replies;

pub use delay::{RecordingDelay, TokioDelay};
pub use replies::{CannedReplyGenerator, ScriptedReplyGenerator};
