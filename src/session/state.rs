//! Storefront Session State Management
//!
//! This module manages the per-session stores, the shared catalog and the
//! storage namespace each session writes its cart to.

use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::store::{Store, View};

// =============================================================================
// Application State
// =============================================================================

/// Catalog file looked up in the assets directory
pub const CATALOG_FILE: &str = "catalog.json";

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A session's store and when it was last used
struct SessionEntry {
    store: Store,
    last_seen: Instant,
}

/// Core application state containing session stores and the catalog
pub struct AppState {
    /// One store per browser session, keyed by session id.
    /// The entry guard serializes actions within a session.
    sessions: DashMap<String, SessionEntry>,

    catalog: Arc<Catalog>,

    /// Root of per-session cart storage; `None` keeps carts in memory.
    data_dir: Option<PathBuf>,
}

impl AppState {
    /// Loads the catalog and prepares the data directory from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog_path = match &config.catalog.path {
            Some(path) => path.clone(),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::locate_assets_directory(&current_dir).join(CATALOG_FILE)
            }
        };

        let catalog = Catalog::load(&catalog_path)?;
        tracing::info!(
            path = %catalog_path.display(),
            products = catalog.len(),
            "catalog loaded"
        );

        if let Some(dir) = &config.storage.data_dir {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::Storage(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }

        Ok(Self::new(catalog, config.storage.data_dir.clone()))
    }

    pub fn new(catalog: Catalog, data_dir: Option<PathBuf>) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog: Arc::new(catalog),
            data_dir,
        }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Renders the session's view without registering it.
    ///
    /// Unknown sessions are rendered from a throwaway store over their
    /// storage namespace, so read-only requests never grow the session map.
    pub fn render_session(&self, session_id: &str) -> View {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.last_seen = Instant::now();
            return entry.store.view();
        }
        Store::new(self.catalog.clone(), self.open_storage(session_id)).view()
    }

    /// Runs `f` against the session's store, creating the store (and
    /// restoring its cart) on first use. Holds the session entry for the
    /// whole call.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::info!(session = session_id, "new storefront session");
                SessionEntry {
                    store: Store::new(self.catalog.clone(), self.open_storage(session_id)),
                    last_seen: Instant::now(),
                }
            });
        entry.last_seen = Instant::now();
        f(&mut entry.store)
    }

    /// Drops sessions unused for at least `max_idle`. Their carts stay in
    /// storage and are restored when the session comes back.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_seen.elapsed() < max_idle);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::info!(evicted, remaining = self.sessions.len(), "evicted idle sessions");
        }
        evicted
    }

    /// The session's storage namespace. The directory itself is only created
    /// by the first cart write.
    fn open_storage(&self, session_id: &str) -> Arc<dyn KeyValueStore> {
        match &self.data_dir {
            Some(root) => Arc::new(FileStore::new(root.join(session_id))),
            None => Arc::new(MemoryStore::new()),
        }
    }
}
