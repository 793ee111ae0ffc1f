//! Storefront Session Module
//!
//! - Per-session store registry (AppState)
//! - Session cookie helpers
//! - REST API handlers for the presentation layer

pub mod handlers;
pub mod helpers;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
