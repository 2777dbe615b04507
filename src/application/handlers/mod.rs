//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod login;
pub mod marketplace;
pub mod onboarding;

pub use chat::{ChatSimulator, SendMessageResult};
pub use login::{LoginOutcome, SubmitLoginCommand, SubmitLoginHandler};
pub use marketplace::{BrowseListingsHandler, BrowseListingsQuery};
pub use onboarding::{MintReceipt, MintTwinHandler};
