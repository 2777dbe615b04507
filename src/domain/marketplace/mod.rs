//! Marketplace module - Twins listed for sale.

mod catalog;
mod listing;

pub use catalog::{Category, MarketplaceCatalog, SortOrder};
pub use listing::{EthPrice, StarRating, TwinListing};
