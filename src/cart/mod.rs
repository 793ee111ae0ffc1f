//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine)
//! - Business logic helpers (snapshot normalization, formatting)
//! - The cart manager with write-through persistence

pub mod helpers;
pub mod manager;
pub mod models;

// Re-export commonly used types for convenience
pub use manager::Cart;
pub use models::CartLine;
