//! Reply generator adapters.

mod canned;
mod scripted;

pub use canned::CannedReplyGenerator;
pub use scripted::ScriptedReplyGenerator;
