//! Session-scoped wishlist.

use crate::catalog::models::ProductId;

/// Product ids marked for later, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present. Returns the new
    /// membership.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| *id == product_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    pub fn is_wishlisted(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
