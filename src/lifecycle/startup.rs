//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the view loader selected by configuration
//! - Compile the route table and wrap it in a resolver
//! - Create the mount host at the initial location
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order: loader, resolver, host

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{RouterConfig, ViewSource, ViewsConfig};
use crate::navigation::{MountHost, NavigationError};
use crate::routing::{Resolver, RouteError};
use crate::views::{FsViewLoader, HttpViewLoader, StaticViewLoader, ViewId, ViewLoader};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error("invalid views.base_url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Every view the configuration can load, including the fallback.
pub fn declared_views(config: &RouterConfig) -> BTreeSet<ViewId> {
    config
        .routes
        .iter()
        .map(|r| r.view.clone())
        .chain(std::iter::once(config.views.fallback.clone()))
        .collect()
}

/// Build the loader selected by `views.source`.
pub fn build_loader(
    views: &ViewsConfig,
    declared: BTreeSet<ViewId>,
) -> Result<Arc<dyn ViewLoader>, StartupError> {
    let loader: Arc<dyn ViewLoader> = match views.source {
        ViewSource::Static => Arc::new(StaticViewLoader::placeholders(declared)),
        ViewSource::Dir => Arc::new(FsViewLoader::new(&views.dir, views.extension.as_str())),
        ViewSource::Http => Arc::new(HttpViewLoader::new(&views.base_url, views.extension.as_str())?),
    };
    tracing::info!(source = ?views.source, "View loader ready");
    Ok(loader)
}

/// Build a resolver for `config`.
pub fn build_resolver(config: &RouterConfig) -> Result<Resolver, StartupError> {
    let loader = build_loader(&config.views, declared_views(config))?;
    let resolver = Resolver::from_config(config, loader)?;

    tracing::info!(
        routes = resolver.table().len(),
        fallback = %resolver.fallback(),
        load_timeout_ms = config.views.load_timeout_ms,
        "Resolver initialized"
    );
    Ok(resolver)
}

/// Build a mount host for `config`, positioned at `initial_location`.
pub fn build_host(config: &RouterConfig, initial_location: &str) -> Result<MountHost, StartupError> {
    let resolver = build_resolver(config)?;
    Ok(MountHost::new(resolver, initial_location)?)
}
