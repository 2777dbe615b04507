//! TwinListing entity and its value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ListingId, ValidationError};

/// Price in milli-ether (1 ETH = 1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EthPrice(u32);

impl EthPrice {
    pub const fn from_milli(milli: u32) -> Self {
        Self(milli)
    }
}

impl fmt::Display for EthPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac % 10 == 0 {
            write!(f, "{}.{:02} ETH", whole, frac / 10)
        } else {
            write!(f, "{}.{:03} ETH", whole, frac)
        }
    }
}

/// Star rating with one decimal, 0.0 to 5.0, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Creates a rating from tenths of a star.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if above 50 (5.0 stars)
    pub fn from_tenths(tenths: u8) -> Result<Self, ValidationError> {
        if tenths > 50 {
            return Err(ValidationError::out_of_range("rating", 0, 50, tenths as i32));
        }
        Ok(Self(tenths))
    }

    /// For catalogue constants known to be in range.
    pub(super) const fn from_tenths_unchecked(tenths: u8) -> Self {
        Self(tenths)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// A twin offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwinListing {
    pub id: ListingId,
    pub name: &'static str,
    pub creator: &'static str,
    pub image: &'static str,
    pub traits: [&'static str; 3],
    pub price: EthPrice,
    pub rating: StarRating,
}

impl TwinListing {
    /// Case-insensitive match against name, creator and traits.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.creator.to_lowercase().contains(needle)
            || self.traits.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
