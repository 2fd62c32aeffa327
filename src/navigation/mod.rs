//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Location (link click, back/forward, programmatic push)
//!     → path.rs (normalize: leading slash, no query/fragment)
//!     → history.rs (push / replace / move cursor)
//!     → state.rs (begin: new current path + generation ticket)
//!     → routing::Resolver (resolve, may suspend on a view load)
//!     → host.rs (ticket still current? mount : discard)
//! ```
//!
//! # Design Decisions
//! - Resolver and navigation state are constructed explicitly and injected, no globals
//! - Last navigation wins; cancellation is logical, never a forced abort

pub mod history;
pub mod host;
pub mod path;
pub mod state;

use thiserror::Error;

use crate::routing::ResolveError;

pub use history::MemoryHistory;
pub use host::{MountHost, Mounted, MountedSummary, NavigationOutcome};
pub use path::normalize_path;
pub use state::{CurrentNavigation, NavigationState, NavigationTicket};

/// Errors returned to the caller of a navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid location '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The latest navigation's view failed to load.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
