//! Chat session handlers.

mod chat_simulator;

pub use chat_simulator::{ChatSimulator, SendMessageResult};
