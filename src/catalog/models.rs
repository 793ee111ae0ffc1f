//! Catalog Domain Models
//!
//! Products are immutable once loaded; the catalog only hands out shared
//! references to them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, path::Path};

use crate::error::{Error, Result};

// =============================================================================
// Product Models
// =============================================================================

/// Unique product identifier as it appears in the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    /// Display name
    pub name: String,

    pub brand: String,

    /// Current selling price
    pub price: Decimal,

    /// List price before discount
    pub original_price: Decimal,

    /// Discount percentage shown on the product card
    #[serde(default)]
    pub discount: u8,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub is_best_seller: bool,

    /// Image reference (URL or asset path)
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Amount saved per unit against the list price, never negative.
    pub fn savings(&self) -> Decimal {
        self.original_price
            .saturating_sub(self.price)
            .max(Decimal::ZERO)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only, ordered product list
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(Error::Catalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// Loads the catalog from a JSON array of products on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands in first-seen catalog order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }
        brands
    }

    pub fn best_sellers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_best_seller)
    }
}
