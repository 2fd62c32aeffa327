//! View subsystem.
//!
//! # Data Flow
//! ```text
//! Route matched → ViewId identified
//!     → cache.rs (already loaded? return shared handle)
//!     → loader.rs (first need: fetch module)
//!         - fs.rs (read from a views directory)
//!         - http.rs (GET from a module server)
//!     → ViewHandle (Arc'd unit, same allocation on every later hit)
//! ```
//!
//! # Design Decisions
//! - View units are opaque: the router never inspects `source`
//! - Loads are deferred, idempotent and cached; failures are not cached
//! - Every load is bounded by the resilience timeout

pub mod cache;
pub mod fs;
pub mod http;
pub mod loader;
pub mod types;

pub use cache::ViewCache;
pub use fs::FsViewLoader;
pub use http::HttpViewLoader;
pub use loader::{StaticViewLoader, ViewLoader};
pub use types::{LoadError, ViewHandle, ViewId, ViewUnit};
