//! Onboarding wizard handlers.

mod mint_twin;

pub use mint_twin::{MintReceipt, MintTwinHandler};
