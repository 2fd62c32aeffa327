//! Shared loaders for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use futures_util::future::BoxFuture;
use tokio::sync::Semaphore;

use view_router::config::RouterConfig;
use view_router::views::{LoadError, ViewCache, ViewId, ViewLoader, ViewUnit};
use view_router::Resolver;

#[allow(dead_code)]
pub const VIEWS: [&str; 4] = ["Dashboard", "ManagerProduct", "ManagerUser", "NotFound"];

/// Loader that counts calls per view, can hold loads behind a gate,
/// and can be told to fail specific views.
#[derive(Debug, Default)]
pub struct TestLoader {
    calls: DashMap<ViewId, AtomicU32>,
    gates: HashMap<ViewId, Arc<Semaphore>>,
    failing: HashMap<ViewId, String>,
}

#[allow(dead_code)]
impl TestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold loads of `view` until [`release`](Self::release) is called.
    pub fn gated(mut self, view: &str) -> Self {
        self.gates.insert(ViewId::new(view), Arc::new(Semaphore::new(0)));
        self
    }

    /// Reject loads of `view` with `reason`.
    pub fn failing(mut self, view: &str, reason: &str) -> Self {
        self.failing.insert(ViewId::new(view), reason.to_string());
        self
    }

    /// Let every pending and future load of `view` through.
    pub fn release(&self, view: &str) {
        if let Some(gate) = self.gates.get(&ViewId::new(view)) {
            // Permits are returned on drop, so one lets every waiter through in turn.
            gate.add_permits(1);
        }
    }

    pub fn calls(&self, view: &str) -> u32 {
        self.calls
            .get(&ViewId::new(view))
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Wait until `view` has been requested at least once.
    pub async fn wait_for_call(&self, view: &str) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.calls(view) == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("view load was never requested");
    }
}

impl ViewLoader for TestLoader {
    fn load<'a>(&'a self, id: &'a ViewId) -> BoxFuture<'a, Result<ViewUnit, LoadError>> {
        Box::pin(async move {
            self.calls
                .entry(id.clone())
                .or_insert_with(|| AtomicU32::new(0))
                .fetch_add(1, Ordering::SeqCst);

            if let Some(gate) = self.gates.get(id) {
                let _permit = gate
                    .acquire()
                    .await
                    .map_err(|e| LoadError::Rejected(e.to_string()))?;
            }

            if let Some(reason) = self.failing.get(id) {
                return Err(LoadError::Rejected(reason.clone()));
            }

            Ok(ViewUnit::new(id.clone(), format!("<{}/>", id)))
        })
    }
}

/// Resolver over the default route table and `loader`.
#[allow(dead_code)]
pub fn resolver_with(loader: Arc<TestLoader>, load_timeout_ms: u64) -> Resolver {
    let config = RouterConfig::default();
    let table = view_router::routing::RouteTable::from_config(&config.routes, config.matching)
        .expect("default route table is valid");
    let cache = ViewCache::new(loader, load_timeout_ms);
    Resolver::new(table, cache, config.views.fallback)
}
