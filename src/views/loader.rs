//! View loader abstraction.
//!
//! # Responsibilities
//! - Fetch/instantiate a view module on first need
//! - Report failures as [`LoadError`] without retrying
//!
//! # Design Decisions
//! - Loaders are stateless with respect to caching; [`ViewCache`] owns that
//! - Boxed futures keep the trait object-safe so the resolver can hold `Arc<dyn ViewLoader>`
//!
//! [`ViewCache`]: crate::views::ViewCache

use std::collections::HashMap;

use futures_util::future::BoxFuture;

use crate::views::types::{LoadError, ViewId, ViewUnit};

/// Trait for deferred view module loading.
pub trait ViewLoader: Send + Sync + std::fmt::Debug {
    /// Fetch the module for `id`. Called at most once per successful load.
    fn load<'a>(&'a self, id: &'a ViewId) -> BoxFuture<'a, Result<ViewUnit, LoadError>>;
}

/// In-memory loader backed by a fixed map of view sources.
#[derive(Debug, Clone, Default)]
pub struct StaticViewLoader {
    sources: HashMap<ViewId, String>,
}

impl StaticViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view source, replacing any previous one.
    pub fn with_view(mut self, id: impl Into<ViewId>, source: impl Into<String>) -> Self {
        self.sources.insert(id.into(), source.into());
        self
    }

    /// Loader with a placeholder source for every given view.
    pub fn placeholders<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ViewId>,
    {
        let sources = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                let source = format!("<template><{0}/></template>", id);
                (id, source)
            })
            .collect();
        Self { sources }
    }
}

impl ViewLoader for StaticViewLoader {
    fn load<'a>(&'a self, id: &'a ViewId) -> BoxFuture<'a, Result<ViewUnit, LoadError>> {
        Box::pin(async move {
            self.sources
                .get(id)
                .map(|source| ViewUnit::new(id.clone(), source.clone()))
                .ok_or_else(|| LoadError::NotFound(id.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_loader() {
        let loader = StaticViewLoader::new().with_view("Dashboard", "<dashboard/>");

        let unit = loader.load(&ViewId::new("Dashboard")).await.unwrap();
        assert_eq!(unit.source, "<dashboard/>");

        let missing = loader.load(&ViewId::new("Nope")).await;
        assert!(matches!(missing, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_placeholders() {
        let loader = StaticViewLoader::placeholders(["NotFound"]);
        let unit = loader.load(&ViewId::new("NotFound")).await.unwrap();
        assert_eq!(unit.source, "<template><NotFound/></template>");
    }
}
