//! MarketplaceCatalog - The fixed set of twins on offer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::listing::{EthPrice, StarRating, TwinListing};
use crate::domain::foundation::{ListingId, ValidationError};

const LISTINGS: [TwinListing; 6] = [
    TwinListing {
        id: ListingId::new(1),
        name: "Intellex",
        creator: "0x1a2...3b4c",
        image: "https://images.pexels.com/photos/4050291/pexels-photo-4050291.jpeg",
        traits: ["Analytical", "Philosophical", "Calm"],
        price: EthPrice::from_milli(250),
        rating: StarRating::from_tenths_unchecked(47),
    },
    TwinListing {
        id: ListingId::new(2),
        name: "Nova",
        creator: "0x5e6...7f8g",
        image: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg",
        traits: ["Creative", "Witty", "Curious"],
        price: EthPrice::from_milli(320),
        rating: StarRating::from_tenths_unchecked(49),
    },
    TwinListing {
        id: ListingId::new(3),
        name: "Cortex",
        creator: "0x9h0...1i2j",
        image: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg",
        traits: ["Precise", "Logical", "Detailed"],
        price: EthPrice::from_milli(180),
        rating: StarRating::from_tenths_unchecked(45),
    },
    TwinListing {
        id: ListingId::new(4),
        name: "Lumina",
        creator: "0x3k4...5l6m",
        image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg",
        traits: ["Empathetic", "Intuitive", "Warm"],
        price: EthPrice::from_milli(280),
        rating: StarRating::from_tenths_unchecked(48),
    },
    TwinListing {
        id: ListingId::new(5),
        name: "Synth",
        creator: "0x7n8...9o0p",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg",
        traits: ["Technical", "Innovative", "Direct"],
        price: EthPrice::from_milli(220),
        rating: StarRating::from_tenths_unchecked(46),
    },
    TwinListing {
        id: ListingId::new(6),
        name: "Quantum",
        creator: "0xq1r...2s3t",
        image: "https://images.pexels.com/photos/2599244/pexels-photo-2599244.jpeg",
        traits: ["Strategic", "Visionary", "Bold"],
        price: EthPrice::from_milli(350),
        rating: StarRating::from_tenths_unchecked(49),
    },
];

/// Orderings offered by the "Sort by" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    Rating,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::PriceHigh => "price_high",
            SortOrder::PriceLow => "price_low",
            SortOrder::Rating => "rating",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "price_high" => Ok(SortOrder::PriceHigh),
            "price_low" => Ok(SortOrder::PriceLow),
            "rating" => Ok(SortOrder::Rating),
            other => Err(ValidationError::invalid_format(
                "sort",
                format!("unknown sort order '{}'", other),
            )),
        }
    }
}

/// Options of the "Categories" selector.
///
/// Listings carry no category of their own. A listing belongs to a
/// category when one of its traits has the category's name, so
/// `Professional` and `Entertainment` currently match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Creative,
    Analytical,
    Professional,
    Entertainment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Creative => "creative",
            Category::Analytical => "analytical",
            Category::Professional => "professional",
            Category::Entertainment => "entertainment",
        }
    }

    /// True if `listing` falls under this category.
    pub fn includes(&self, listing: &TwinListing) -> bool {
        match self {
            Category::All => true,
            category => listing
                .traits
                .iter()
                .any(|t| t.eq_ignore_ascii_case(category.as_str())),
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "creative" => Ok(Category::Creative),
            "analytical" => Ok(Category::Analytical),
            "professional" => Ok(Category::Professional),
            "entertainment" => Ok(Category::Entertainment),
            other => Err(ValidationError::invalid_format(
                "category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}

/// Read-only catalogue of twin listings.
#[derive(Debug, Clone)]
pub struct MarketplaceCatalog {
    listings: Vec<TwinListing>,
}

impl MarketplaceCatalog {
    /// The six twins shown on the marketplace page.
    pub fn standard() -> Self {
        Self {
            listings: LISTINGS.to_vec(),
        }
    }

    /// Listings in catalogue order.
    pub fn all(&self) -> &[TwinListing] {
        &self.listings
    }

    pub fn get(&self, id: ListingId) -> Option<&TwinListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listings whose name, creator or traits contain `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&TwinListing> {
        let needle = query.trim().to_lowercase();
        self.listings
            .iter()
            .filter(|l| needle.is_empty() || l.matches(&needle))
            .collect()
    }

    /// All listings in the given order.
    pub fn sorted(&self, order: SortOrder) -> Vec<&TwinListing> {
        self.browse("", order)
    }

    /// Search then sort. Equal keys keep catalogue order.
    pub fn browse(&self, query: &str, order: SortOrder) -> Vec<&TwinListing> {
        self.browse_in(Category::All, query, order)
    }

    /// Like `browse`, restricted to one category.
    pub fn browse_in(
        &self,
        category: Category,
        query: &str,
        order: SortOrder,
    ) -> Vec<&TwinListing> {
        let mut results = self.search(query);
        results.retain(|l| category.includes(l));
        match order {
            SortOrder::Newest => results.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Oldest => results.sort_by(|a, b| a.id.cmp(&b.id)),
            SortOrder::PriceHigh => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::PriceLow => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::Rating => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
        results
    }
}

impl Default for MarketplaceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(listings: &[&TwinListing]) -> Vec<&'static str> {
        listings.iter().map(|l| l.name).collect()
    }

    #[test]
    fn standard_catalog_has_six_twins() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(catalog.all().len(), 6);
        assert_eq!(catalog.all()[0].name, "Intellex");
        assert_eq!(catalog.all()[0].price.to_string(), "0.25 ETH");
    }

    #[test]
    fn catalog_ratings_are_in_range() {
        for listing in MarketplaceCatalog::standard().all() {
            assert!(StarRating::from_tenths(listing.rating.tenths()).is_ok());
        }
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(catalog.get(ListingId::new(4)).map(|l| l.name), Some("Lumina"));
        assert!(catalog.get(ListingId::new(99)).is_none());
    }

    #[test]
    fn search_matches_traits_case_insensitively() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(names(&catalog.search("LOGICAL")), vec!["Cortex"]);
        assert_eq!(names(&catalog.search("  warm ")), vec!["Lumina"]);
    }

    #[test]
    fn search_matches_name_and_creator() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(names(&catalog.search("cortex")), vec!["Cortex"]);
        // "Innovative" is a Synth trait
        assert_eq!(names(&catalog.search("nova")), vec!["Nova", "Synth"]);
        assert_eq!(names(&catalog.search("0x7n8")), vec!["Synth"]);
    }

    #[test]
    fn blank_search_returns_everything() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(catalog.search("").len(), 6);
        assert_eq!(catalog.search("   ").len(), 6);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(MarketplaceCatalog::standard().search("grumpy").is_empty());
    }

    #[test]
    fn sorts_by_price() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(
            names(&catalog.sorted(SortOrder::PriceLow)),
            vec!["Cortex", "Synth", "Intellex", "Lumina", "Nova", "Quantum"]
        );
        assert_eq!(
            names(&catalog.sorted(SortOrder::PriceHigh)),
            vec!["Quantum", "Nova", "Lumina", "Intellex", "Synth", "Cortex"]
        );
    }

    #[test]
    fn sorts_by_id_for_newest_and_oldest() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(names(&catalog.sorted(SortOrder::Newest))[0], "Quantum");
        assert_eq!(names(&catalog.sorted(SortOrder::Oldest))[0], "Intellex");
    }

    #[test]
    fn rating_sort_keeps_catalog_order_for_ties() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(
            names(&catalog.sorted(SortOrder::Rating)),
            vec!["Nova", "Quantum", "Lumina", "Intellex", "Synth", "Cortex"]
        );
    }

    #[test]
    fn browse_filters_then_sorts() {
        let catalog = MarketplaceCatalog::standard();
        let results = catalog.browse("ive", SortOrder::PriceLow);
        assert_eq!(names(&results), vec!["Synth", "Lumina", "Nova"]);
    }

    #[test]
    fn sort_order_parses_selector_values() {
        assert_eq!("price_high".parse::<SortOrder>().unwrap(), SortOrder::PriceHigh);
        assert_eq!(SortOrder::default(), SortOrder::Newest);
        assert!("cheapest".parse::<SortOrder>().is_err());
        for order in [
            SortOrder::Newest,
            SortOrder::Oldest,
            SortOrder::PriceHigh,
            SortOrder::PriceLow,
            SortOrder::Rating,
        ] {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
    }

    #[test]
    fn category_matches_listings_by_trait() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(
            names(&catalog.browse_in(Category::Creative, "", SortOrder::Oldest)),
            vec!["Nova"]
        );
        assert_eq!(
            names(&catalog.browse_in(Category::Analytical, "", SortOrder::Oldest)),
            vec!["Intellex"]
        );
        assert!(catalog
            .browse_in(Category::Entertainment, "", SortOrder::Newest)
            .is_empty());
    }

    #[test]
    fn all_category_keeps_every_listing() {
        let catalog = MarketplaceCatalog::standard();
        assert_eq!(
            catalog.browse_in(Category::All, "", SortOrder::Newest),
            catalog.browse("", SortOrder::Newest)
        );
    }

    #[test]
    fn category_parses_select_values() {
        assert_eq!("professional".parse::<Category>(), Ok(Category::Professional));
        assert_eq!(Category::default(), Category::All);
        assert!("music".parse::<Category>().is_err());
    }
}
