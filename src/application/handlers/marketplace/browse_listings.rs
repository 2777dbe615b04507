//! BrowseListingsHandler - Query handler for the marketplace grid.

use crate::domain::foundation::ValidationError;
use crate::domain::marketplace::{Category, MarketplaceCatalog, SortOrder, TwinListing};

/// Query as sent by the search box and the two selectors.
#[derive(Debug, Clone, Default)]
pub struct BrowseListingsQuery {
    pub search: String,
    /// Category key such as `creative`. Defaults to all categories.
    pub category: Option<String>,
    /// Sort key such as `price_low`. Defaults to newest first.
    pub sort: Option<String>,
}

/// Handler for listing twins on the marketplace page.
#[derive(Debug, Clone, Default)]
pub struct BrowseListingsHandler {
    catalog: MarketplaceCatalog,
}

impl BrowseListingsHandler {
    pub fn new(catalog: MarketplaceCatalog) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// - `InvalidFormat("category")` if the category key is not recognised
    /// - `InvalidFormat("sort")` if the sort key is not recognised
    pub fn handle(&self, query: BrowseListingsQuery) -> Result<Vec<TwinListing>, ValidationError> {
        let category = match query.category.as_deref() {
            Some(key) => key.parse::<Category>()?,
            None => Category::default(),
        };
        let order = match query.sort.as_deref() {
            Some(key) => key.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        let results: Vec<TwinListing> = self
            .catalog
            .browse_in(category, &query.search, order)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            search = %query.search,
            category = category.as_str(),
            sort = order.as_str(),
            results = results.len(),
            "Marketplace browsed"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(listings: &[TwinListing]) -> Vec<&'static str> {
        listings.iter().map(|l| l.name).collect()
    }

    #[test]
    fn default_query_lists_newest_first() {
        let results = BrowseListingsHandler::default()
            .handle(BrowseListingsQuery::default())
            .unwrap();
        assert_eq!(
            names(&results),
            vec!["Quantum", "Synth", "Lumina", "Cortex", "Nova", "Intellex"]
        );
    }

    #[test]
    fn search_and_sort_are_combined() {
        let results = BrowseListingsHandler::default()
            .handle(BrowseListingsQuery {
                search: "ive".to_string(),
                category: None,
                sort: Some("price_high".to_string()),
            })
            .unwrap();
        assert_eq!(names(&results), vec!["Nova", "Lumina", "Synth"]);
    }

    #[test]
    fn category_narrows_results() {
        let results = BrowseListingsHandler::default()
            .handle(BrowseListingsQuery {
                search: String::new(),
                category: Some("creative".to_string()),
                sort: None,
            })
            .unwrap();
        assert_eq!(names(&results), vec!["Nova"]);
    }

    #[test]
    fn unknown_category_key_is_rejected() {
        let result = BrowseListingsHandler::default().handle(BrowseListingsQuery {
            category: Some("music".to_string()),
            ..Default::default()
        });
        assert_eq!(
            result.map_err(|e| e.field().to_string()),
            Err("category".to_string())
        );
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let result = BrowseListingsHandler::default().handle(BrowseListingsQuery {
            search: String::new(),
            category: None,
            sort: Some("cheapest".to_string()),
        });
        assert_eq!(result.map_err(|e| e.field().to_string()), Err("sort".to_string()));
    }
}
