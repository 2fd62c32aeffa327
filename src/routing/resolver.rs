//! Path → view resolution.
//!
//! # Responsibilities
//! - Look up the route for a normalized path
//! - Map `NoMatch` to the fallback view instead of failing
//! - Drive the matched view's lazy load through the cache
//!
//! # Design Decisions
//! - Exactly one handle (or one `LoadFailure`) per resolution
//! - No retries; a failed load is not cached, so the next resolution loads again
//! - Resolution never touches navigation state; the mount host owns that

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::observability::metrics;
use crate::routing::error::{NoMatch, ResolveError, RouteError};
use crate::routing::router::{RouteMatch, RouteTable};
use crate::views::{LoadError, ViewCache, ViewHandle, ViewId, ViewLoader};

/// A resolved route: the match plus the loaded view.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub route: RouteMatch,
    pub view: ViewHandle,
}

/// Resolves paths against an immutable route table.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<RouteTable>,
    cache: ViewCache,
    fallback: ViewId,
}

impl Resolver {
    pub fn new(table: RouteTable, cache: ViewCache, fallback: ViewId) -> Self {
        Self {
            table: Arc::new(table),
            cache,
            fallback,
        }
    }

    /// Build the table and cache described by `config` over `loader`.
    pub fn from_config(config: &RouterConfig, loader: Arc<dyn ViewLoader>) -> Result<Self, RouteError> {
        let table = RouteTable::from_config(&config.routes, config.matching)?;
        let cache = ViewCache::new(loader, config.views.load_timeout_ms);
        Ok(Self::new(table, cache, config.views.fallback.clone()))
    }

    /// Match `path` without loading anything.
    pub fn lookup(&self, path: &str) -> RouteMatch {
        match self.table.lookup(path) {
            Ok(m) => m,
            Err(NoMatch { .. }) => {
                tracing::warn!(path = %path, fallback = %self.fallback, "No route matched, using fallback view");
                RouteMatch::fallback(path, self.fallback.clone())
            }
        }
    }

    /// Resolve `path` to its loaded view.
    pub async fn resolve(&self, path: &str) -> Result<ViewHandle, ResolveError> {
        self.resolve_match(path).await.map(|r| r.view)
    }

    /// Resolve `path`, returning both the route match and the loaded view.
    pub async fn resolve_match(&self, path: &str) -> Result<Resolved, ResolveError> {
        let route = self.lookup(path);
        tracing::debug!(
            path = %path,
            route = %route.name,
            view = %route.view,
            matched_by = route.matched_by.as_str(),
            "Route matched"
        );
        metrics::record_resolution(route.view.as_str(), route.matched_by.as_str());

        let view = self
            .cache
            .get_or_load(&route.view)
            .await
            .map_err(|source| ResolveError::LoadFailure {
                view: route.view.clone(),
                path: path.to_string(),
                source,
            })?;

        Ok(Resolved { route, view })
    }

    /// Load a view ahead of navigation.
    pub async fn preload(&self, view: &ViewId) -> Result<ViewHandle, LoadError> {
        self.cache.get_or_load(view).await
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    pub fn fallback(&self) -> &ViewId {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchingConfig, RouteConfig};
    use crate::routing::router::MatchedBy;
    use crate::views::StaticViewLoader;

    fn resolver(config: &RouterConfig) -> Resolver {
        let loader = Arc::new(StaticViewLoader::placeholders([
            "Dashboard",
            "ManagerProduct",
            "ManagerUser",
            "NotFound",
        ]));
        Resolver::from_config(config, loader).unwrap()
    }

    #[tokio::test]
    async fn test_alias_shares_handle() {
        let resolver = resolver(&RouterConfig::default());

        let root = resolver.resolve("/").await.unwrap();
        let dashboard = resolver.resolve("/dashboard").await.unwrap();
        assert_eq!(root.id().as_str(), "Dashboard");
        assert!(root.same_unit(&dashboard));
    }

    #[tokio::test]
    async fn test_fallback_without_catch_all() {
        let mut config = RouterConfig::default();
        config.routes.pop();
        let resolver = resolver(&config);

        let resolved = resolver.resolve_match("/missing/page").await.unwrap();
        assert_eq!(resolved.route.matched_by, MatchedBy::Fallback);
        assert_eq!(resolved.route.route, None);
        assert_eq!(resolved.view.id().as_str(), "NotFound");
    }

    #[tokio::test]
    async fn test_load_failure_surfaces() {
        let config = RouterConfig {
            routes: vec![RouteConfig::new("/broken", "Broken")],
            matching: MatchingConfig::default(),
            ..RouterConfig::default()
        };
        let resolver = resolver(&config);

        let err = resolver.resolve("/broken").await.unwrap_err();
        assert_eq!(err.view().as_str(), "Broken");
        assert!(matches!(
            err,
            ResolveError::LoadFailure {
                source: LoadError::NotFound(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_preload() {
        let resolver = resolver(&RouterConfig::default());
        let id = ViewId::new("ManagerUser");

        let preloaded = resolver.preload(&id).await.unwrap();
        assert!(resolver.cache().is_loaded(&id));

        let resolved = resolver.resolve("/manager-user").await.unwrap();
        assert!(preloaded.same_unit(&resolved));
    }
}
