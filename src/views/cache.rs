//! Lazy view cache.
//!
//! # Responsibilities
//! - Invoke the loader for a view on first need only
//! - Share one in-flight load between concurrent resolutions
//! - Hand out the same [`ViewHandle`] for every later resolution
//!
//! # Design Decisions
//! - One `OnceCell` per view id, created on demand in a `DashMap`
//! - Failed loads leave the cell empty, so the next request loads again
//! - Keyed by view identity: an alias and its primary pattern share one entry

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::resilience::timeouts::with_load_timeout;
use crate::views::loader::ViewLoader;
use crate::views::types::{LoadError, ViewHandle, ViewId};

/// Thread-safe cache of loaded views.
#[derive(Debug, Clone)]
pub struct ViewCache {
    loader: Arc<dyn ViewLoader>,
    cells: Arc<DashMap<ViewId, Arc<OnceCell<ViewHandle>>>>,
    load_timeout_ms: u64,
}

impl ViewCache {
    /// Create an empty cache over `loader`. `load_timeout_ms == 0` disables the deadline.
    pub fn new(loader: Arc<dyn ViewLoader>, load_timeout_ms: u64) -> Self {
        Self {
            loader,
            cells: Arc::new(DashMap::new()),
            load_timeout_ms,
        }
    }

    /// Return the loaded view, loading it if this is the first request.
    pub async fn get_or_load(&self, id: &ViewId) -> Result<ViewHandle, LoadError> {
        // Clone the cell out so the map shard is not locked across the await.
        let cell = self
            .cells
            .entry(id.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .value()
            .clone();

        if let Some(handle) = cell.get() {
            metrics::record_view_load(id.as_str(), "cached");
            return Ok(handle.clone());
        }

        let handle = cell
            .get_or_try_init(|| async {
                tracing::debug!(view = %id, "Loading view module");
                let result = with_load_timeout(self.load_timeout_ms, self.loader.load(id)).await;
                match &result {
                    Ok(_) => {
                        metrics::record_view_load(id.as_str(), "loaded");
                        tracing::info!(view = %id, "View module loaded");
                    }
                    Err(e) => {
                        metrics::record_view_load(id.as_str(), "failed");
                        tracing::warn!(view = %id, error = %e, "View module failed to load");
                    }
                }
                result.map(ViewHandle::new)
            })
            .await?
            .clone();

        metrics::record_cache_size(self.len());
        Ok(handle)
    }

    /// Peek at a loaded view without triggering a load.
    pub fn get(&self, id: &ViewId) -> Option<ViewHandle> {
        self.cells.get(id).and_then(|cell| cell.get().cloned())
    }

    pub fn is_loaded(&self, id: &ViewId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of every view loaded so far, sorted.
    pub fn loaded_views(&self) -> Vec<ViewId> {
        let mut ids: Vec<ViewId> = self
            .cells
            .iter()
            .filter(|r| r.value().initialized())
            .map(|r| r.key().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Number of loaded views.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|r| r.value().initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
