//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `ReplyGenerator` - Produces the twin's reply to a chat message
//! - `Delay` - Simulated latency before replies and mints complete

mod delay;
mod reply_generator;

pub use delay::Delay;
pub use reply_generator::ReplyGenerator;
