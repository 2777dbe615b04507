//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (send, mint, login) change state; queries (browse) only read it.

pub mod handlers;

pub use handlers::{
    // Chat
    ChatSimulator, SendMessageResult,
    // Onboarding
    MintReceipt, MintTwinHandler,
    // Login
    LoginOutcome, SubmitLoginCommand, SubmitLoginHandler,
    // Marketplace
    BrowseListingsHandler, BrowseListingsQuery,
};
