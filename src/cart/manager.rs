//! Cart manager with write-through persistence.
//!
//! Every mutation rewrites the cart slot before returning. Storage failures
//! are logged and otherwise ignored; the in-memory cart stays authoritative.

use rust_decimal::Decimal;
use std::sync::Arc;

use super::helpers::{format_cart_summary, normalize_lines};
use super::models::CartLine;
use crate::catalog::models::{Product, ProductId};
use crate::storage::{KeyValueStore, CART_SLOT};

pub struct Cart {
    lines: Vec<CartLine>,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("lines", &self.lines).finish()
    }
}

impl Cart {
    /// Empty cart that writes to `storage`, without reading it.
    pub fn empty(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            lines: Vec::new(),
            storage,
        }
    }

    /// Restores the cart from the cart slot.
    ///
    /// A missing slot gives an empty cart. An unreadable or malformed slot is
    /// logged and also gives an empty cart; this never fails.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let raw = match storage.get_item(CART_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::empty(storage),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved cart, starting empty");
                return Self::empty(storage);
            }
        };

        match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(lines) => {
                let lines = normalize_lines(lines);
                tracing::debug!(lines = lines.len(), "restored saved cart");
                Self { lines, storage }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse saved cart, starting empty");
                Self::empty(storage)
            }
        }
    }

    /// Adds one unit of `product`, creating the line if needed.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::for_product(product));
        }
        self.persist();
    }

    /// Sets the quantity of an existing line; `new_quantity <= 0` removes it.
    ///
    /// Absent ids are left alone whatever the quantity.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.lines.retain(|l| l.product_id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
        self.persist();
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Total number of units in the cart.
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn cart_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn summary(&self) -> String {
        format_cart_summary(&self.lines)
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.lines) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(CART_SLOT, &snapshot) {
            tracing::warn!(error = %e, "failed to save cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::fixtures::{product, sample_catalog};
    use crate::error::{Error, Result};
    use crate::storage::MemoryStore;

    fn new_cart() -> (Cart, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (Cart::restore(storage.clone()), storage)
    }

    fn saved_lines(storage: &MemoryStore) -> Vec<CartLine> {
        let raw = storage.get_item(CART_SLOT).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_repeated_adds_aggregate_into_one_line() {
        let catalog = sample_catalog();
        let (mut cart, _) = new_cart();
        let plan = [(1, 3), (2, 1), (4, 2)];

        for (id, times) in plan {
            for _ in 0..times {
                cart.add_to_cart(catalog.get(ProductId(id)).unwrap());
            }
        }

        assert_eq!(cart.cart_count(), 6);
        assert_eq!(cart.lines().len(), 3);
        for (id, times) in plan {
            assert_eq!(cart.line(ProductId(id)).unwrap().quantity, times);
        }
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let (cart, _) = new_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total(), Decimal::ZERO);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes_line() {
        let catalog = sample_catalog();
        for quantity in [0, -1, -50] {
            let (mut cart, _) = new_cart();
            cart.add_to_cart(catalog.get(ProductId(1)).unwrap());
            cart.add_to_cart(catalog.get(ProductId(2)).unwrap());

            cart.update_quantity(ProductId(1), quantity);
            assert!(cart.line(ProductId(1)).is_none());
            assert_eq!(cart.lines().len(), 1);
        }
    }

    #[test]
    fn test_update_on_absent_id_is_noop() {
        let catalog = sample_catalog();
        let (mut cart, _) = new_cart();
        cart.add_to_cart(catalog.get(ProductId(1)).unwrap());
        let before = cart.lines().to_vec();

        cart.update_quantity(ProductId(99), 0);
        cart.update_quantity(ProductId(99), -3);
        cart.update_quantity(ProductId(99), 4);
        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut huge = product(7, "Vault", "Acme", 1, 5.0);
        huge.price = Decimal::MAX;
        let (mut cart, _) = new_cart();
        cart.add_to_cart(&huge);
        cart.update_quantity(ProductId(7), 2);
        cart.add_to_cart(sample_catalog().get(ProductId(1)).unwrap());

        assert_eq!(cart.line(ProductId(7)).unwrap().subtotal(), Decimal::MAX);
        assert_eq!(cart.cart_total(), Decimal::MAX);
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn test_update_sets_quantity() {
        let catalog = sample_catalog();
        let (mut cart, _) = new_cart();
        cart.add_to_cart(catalog.get(ProductId(2)).unwrap());
        cart.update_quantity(ProductId(2), 7);
        assert_eq!(cart.cart_count(), 7);
        assert_eq!(cart.cart_total(), Decimal::from(499 * 7));
    }

    #[test]
    fn test_total_after_remove_excludes_removed_price() {
        let catalog = sample_catalog();
        let (mut cart, _) = new_cart();
        cart.add_to_cart(catalog.get(ProductId(1)).unwrap());
        cart.add_to_cart(catalog.get(ProductId(3)).unwrap());
        cart.add_to_cart(catalog.get(ProductId(3)).unwrap());
        assert_eq!(cart.cart_total(), Decimal::from(999 + 2 * 1499));

        cart.remove_from_cart(ProductId(3));
        assert_eq!(cart.cart_total(), Decimal::from(999));

        cart.remove_from_cart(ProductId(42));
        assert_eq!(cart.cart_count(), 1);
    }

    #[test]
    fn test_every_mutation_is_written_through() {
        let catalog = sample_catalog();
        let (mut cart, storage) = new_cart();

        cart.add_to_cart(catalog.get(ProductId(1)).unwrap());
        assert_eq!(saved_lines(&storage), cart.lines());

        cart.update_quantity(ProductId(1), 3);
        assert_eq!(saved_lines(&storage)[0].quantity, 3);

        cart.remove_from_cart(ProductId(1));
        assert!(saved_lines(&storage).is_empty());
    }

    #[test]
    fn test_restore_round_trips_saved_cart() {
        let catalog = sample_catalog();
        let (mut cart, storage) = new_cart();
        cart.add_to_cart(catalog.get(ProductId(4)).unwrap());
        cart.add_to_cart(catalog.get(ProductId(4)).unwrap());

        let restored = Cart::restore(storage);
        assert_eq!(restored.lines(), cart.lines());
        assert_eq!(restored.summary(), "2x Pixel 8");
    }

    #[test]
    fn test_restore_from_corrupted_snapshot_is_empty() {
        for raw in ["not json", "{\"productId\": 1}", "[{\"name\": 3}]", ""] {
            let storage = Arc::new(MemoryStore::new());
            storage.set_item(CART_SLOT, raw).unwrap();
            let cart = Cart::restore(storage);
            assert!(cart.is_empty(), "snapshot {:?} should restore empty", raw);
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("unavailable".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_storage_failures_do_not_affect_cart() {
        let mut cart = Cart::restore(Arc::new(BrokenStore));
        assert!(cart.is_empty());

        cart.add_to_cart(&product(9, "Cable", "Anker", 20, 4.0));
        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.cart_total(), Decimal::from(20));
    }
}
