//! Storefront Library
//!
//! This library provides the state core of a storefront: catalog search and
//! sorting, a write-through persisted cart, a wishlist and theme state, plus
//! a small HTTP surface for the presentation layer.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod store;
pub mod theme;
pub mod wishlist;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
