//! Client-side view router library.
//!
//! Resolves navigable paths to lazily-loaded view units: ordered route table,
//! aliases, catch-all fallback, cached on-demand loading and last-navigation-wins
//! mounting.

pub mod config;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod views;

pub use config::RouterConfig;
pub use navigation::MountHost;
pub use routing::Resolver;
