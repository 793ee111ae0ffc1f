//! Local key-value storage
//!
//! A browser-style string slot store. The cart snapshot is the only slot the
//! core writes; other keys are available to callers.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Slot holding the serialized cart.
pub const CART_SLOT: &str = "cart";

/// String key-value slots, synchronous like `localStorage`.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the slot has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the slot.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
