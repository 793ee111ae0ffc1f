//! Product Catalog Module
//!
//! - Product and catalog models
//! - Pure search/brand/sort derivation of the visible product list

pub mod filter;
pub mod models;

pub use filter::{visible_products, BrandFilter, FilterState, SortKey, ALL_BRANDS};
pub use models::{Catalog, Product, ProductId};
