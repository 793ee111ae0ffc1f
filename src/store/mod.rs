//! Per-session storefront store
//!
//! Owns the cart, wishlist, filter state, theme and cart panel flag of one
//! browser session. All changes go through [`Store::dispatch`]; the
//! presentation layer reads state through [`Store::view`].

pub mod action;
pub mod view;

pub use action::Action;
pub use view::{CartView, ProductView, View};

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::cart::Cart;
use crate::catalog::{visible_products, Catalog, FilterState, Product, ProductId};
use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use crate::theme::Theme;
use crate::wishlist::Wishlist;

#[derive(Debug)]
pub struct Store {
    catalog: Arc<Catalog>,
    cart: Cart,
    wishlist: Wishlist,
    filter: FilterState,
    theme: Theme,
    cart_open: bool,
}

impl Store {
    /// Starts a session, restoring the cart from `storage`.
    pub fn new(catalog: Arc<Catalog>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog,
            cart: Cart::restore(storage),
            wishlist: Wishlist::new(),
            filter: FilterState::default(),
            theme: Theme::default(),
            cart_open: false,
        }
    }

    /// Applies one user action. Fails only for product ids the catalog does
    /// not know, leaving state untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, "dispatch");

        match action {
            Action::AddToCart { product_id } => {
                let product = self.product(product_id)?.clone();
                self.cart.add_to_cart(&product);
            }
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(product_id, quantity),
            Action::RemoveFromCart { product_id } => self.cart.remove_from_cart(product_id),
            Action::ClearCart => self.cart.clear(),
            Action::ToggleWishlist { product_id } => {
                self.product(product_id)?;
                self.wishlist.toggle(product_id);
            }
            Action::SetSearch { search } => self.filter.search = search,
            Action::SetBrand { brand } => self.filter.brand = brand,
            Action::SetSort { sort } => self.filter.sort = sort,
            Action::ToggleTheme => {
                self.theme.toggle();
            }
            Action::OpenCart => self.cart_open = true,
            Action::CloseCart => self.cart_open = false,
        }
        Ok(())
    }

    fn product(&self, product_id: ProductId) -> Result<&Product> {
        self.catalog
            .get(product_id)
            .ok_or(Error::UnknownProduct(product_id))
    }

    /// Products currently visible for the session's filter state.
    pub fn visible_products(&self) -> Vec<&Product> {
        visible_products(&self.catalog, &self.filter)
    }

    /// Savings against list prices for lines still present in the catalog.
    pub fn cart_savings(&self) -> Decimal {
        self.cart
            .lines()
            .iter()
            .filter_map(|line| {
                self.catalog
                    .get(line.product_id)
                    .map(|p| p.savings().saturating_mul(Decimal::from(line.quantity)))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn view(&self) -> View {
        let products = self
            .visible_products()
            .into_iter()
            .map(|p| ProductView {
                product: p.clone(),
                wishlisted: self.wishlist.is_wishlisted(p.id),
                in_cart: self.cart.line(p.id).map_or(0, |l| l.quantity),
            })
            .collect();

        View {
            products,
            brands: self.catalog.brands().into_iter().map(String::from).collect(),
            best_sellers: self.catalog.best_sellers().map(|p| p.id).collect(),
            filter: self.filter.clone(),
            cart: CartView {
                lines: self.cart.lines().to_vec(),
                count: self.cart.cart_count(),
                total: self.cart.cart_total(),
                savings: self.cart_savings(),
            },
            wishlist: self.wishlist.ids().to_vec(),
            theme: self.theme,
            cart_open: self.cart_open,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }
}
