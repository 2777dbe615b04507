//! Marketplace query handlers.

mod browse_listings;

pub use browse_listings::{BrowseListingsHandler, BrowseListingsQuery};
