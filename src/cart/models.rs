//! Shopping Cart Domain Models
//!
//! This module contains the data structures persisted in the cart slot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::models::{Product, ProductId};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One distinct product's presence in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,

    /// Product name captured when the line was created
    pub name: String,

    /// Unit price captured when the line was created
    pub unit_price: Decimal,

    /// Quantity of this product (defaults to 1, always at least 1 in a cart)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Line price, saturating at the decimal range.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}
