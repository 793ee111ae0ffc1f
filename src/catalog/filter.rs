//! Search, brand filter and sort over the catalog.
//!
//! The visible list is always derived from scratch from the catalog and the
//! current [`FilterState`]; nothing here mutates its inputs.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::models::{Catalog, Product};

/// Sentinel brand value meaning "no brand restriction".
pub const ALL_BRANDS: &str = "All";

/// Brand selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrandFilter {
    #[default]
    All,
    Brand(String),
}

impl From<String> for BrandFilter {
    fn from(value: String) -> Self {
        if value == ALL_BRANDS {
            BrandFilter::All
        } else {
            BrandFilter::Brand(value)
        }
    }
}

impl From<BrandFilter> for String {
    fn from(value: BrandFilter) -> Self {
        match value {
            BrandFilter::All => ALL_BRANDS.to_string(),
            BrandFilter::Brand(brand) => brand,
        }
    }
}

impl BrandFilter {
    fn admits(&self, product: &Product) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Brand(brand) => product.brand == *brand,
        }
    }
}

/// Ordering applied to the visible list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Default,
    #[serde(alias = "price-low")]
    PriceAsc,
    #[serde(alias = "price-high")]
    PriceDesc,
    #[serde(alias = "rating")]
    RatingDesc,
    #[serde(alias = "name")]
    NameAsc,
}

/// Search, brand and sort criteria currently applied to the catalog view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub brand: BrandFilter,
    pub sort: SortKey,
}

impl FilterState {
    fn matches_search(needle: &str, product: &Product) -> bool {
        needle.is_empty()
            || product.name.to_lowercase().contains(needle)
            || product.brand.to_lowercase().contains(needle)
    }
}

/// Derives the visible product list for `filter`.
pub fn visible_products<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Product> {
    let needle = filter.search.to_lowercase();

    let mut visible: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| FilterState::matches_search(&needle, p))
        .filter(|p| filter.brand.admits(p))
        .collect();

    sort_products(&mut visible, filter.sort);
    visible
}

/// Stable sort of a list of product references.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Case-folded comparison with the raw name as tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
