//! Render snapshot handed to the presentation layer.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartLine;
use crate::catalog::{FilterState, Product, ProductId};
use crate::theme::Theme;

/// Everything one render cycle needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Visible products after search, brand filter and sort
    pub products: Vec<ProductView>,

    /// Brand selector options, `"All"` excluded
    pub brands: Vec<String>,

    /// Best-seller ids in catalog order, independent of the filter
    pub best_sellers: Vec<ProductId>,

    pub filter: FilterState,

    pub cart: CartView,

    pub wishlist: Vec<ProductId>,

    pub theme: Theme,

    pub cart_open: bool,
}

/// A product card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,

    pub wishlisted: bool,

    /// Units of this product already in the cart
    pub in_cart: u32,
}

/// Cart panel contents
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub count: u64,
    pub total: Decimal,
    pub savings: Decimal,
}
