use crate::core::filters::{matches_dimensions, RELAXATION_LEVELS};
use crate::models::{Catalog, CatalogItem, PreferenceQuery, ProductCategory};
use std::collections::BTreeMap;
use tracing::debug;

/// Result cap used when none is configured, matching the two-item
/// shortlists the recommendation flow renders per category.
pub const DEFAULT_RESULT_CAP: usize = 2;

/// Result of a recommendation run
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    /// Per-category shortlists; categories with no match at any
    /// relaxation level are absent.
    pub products: BTreeMap<ProductCategory, Vec<CatalogItem>>,
    pub total_considered: usize,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Graduated-relaxation attribute matcher
///
/// For each catalog category independently, walks the relaxation ladder
/// from strictest to loosest and keeps the first level that yields any
/// match. Items are taken in catalog order; there is no ranking.
#[derive(Debug, Clone)]
pub struct Matcher {
    result_cap: usize,
}

impl Matcher {
    pub fn new(result_cap: usize) -> Self {
        Self { result_cap }
    }

    pub fn with_default_cap() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
        }
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// Build per-category shortlists for a preference query
    ///
    /// # Arguments
    /// * `query` - one chosen value per dimension
    /// * `catalog` - immutable catalog snapshot
    ///
    /// # Returns
    /// RecommendationResult mapping each matchable category to at most
    /// `result_cap` items.
    pub fn recommend(&self, query: &PreferenceQuery, catalog: &Catalog) -> RecommendationResult {
        let mut products = BTreeMap::new();
        let mut total_considered = 0;

        for category in catalog.categories() {
            let items = catalog.items(category);
            total_considered += items.len();

            match self.match_category(items, query) {
                Some((level, matched)) => {
                    debug!(
                        "category {} matched {} item(s) at relaxation level {}",
                        category,
                        matched.len(),
                        level
                    );
                    products.insert(category, matched);
                }
                None => {
                    debug!("category {} has no match at any relaxation level", category);
                }
            }
        }

        RecommendationResult {
            products,
            total_considered,
        }
    }

    /// Walk the ladder for one category's items
    ///
    /// Returns the 1-based level that matched and up to `result_cap`
    /// items, or None when even the loosest level is empty.
    fn match_category(
        &self,
        items: &[CatalogItem],
        query: &PreferenceQuery,
    ) -> Option<(usize, Vec<CatalogItem>)> {
        for (index, dimensions) in RELAXATION_LEVELS.iter().enumerate() {
            let matched: Vec<CatalogItem> = items
                .iter()
                .filter(|item| matches_dimensions(item, dimensions, query))
                .take(self.result_cap)
                .cloned()
                .collect();

            if !matched.is_empty() {
                return Some((index + 1, matched));
            }
        }

        None
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_cap()
    }
}
