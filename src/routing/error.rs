//! Routing errors.

use thiserror::Error;

use crate::views::{LoadError, ViewId};

/// No route matched; the resolver maps this to the fallback view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path '{path}'")]
pub struct NoMatch {
    pub path: String,
}

/// Errors from route table construction.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two definitions (patterns or aliases) resolve the same path.
    #[error("path '{path}' is declared by both route '{first}' and route '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("catch-all route '{pattern}' at position {position} must be the last route")]
    CatchAllNotLast { pattern: String, position: usize },

    #[error("more than one catch-all route: '{first}' and '{second}'")]
    MultipleCatchAll { first: String, second: String },
}

/// Errors surfaced to the mount host by a resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The matched route's view module could not be loaded.
    #[error("failed to load view '{view}' for path '{path}': {source}")]
    LoadFailure {
        view: ViewId,
        path: String,
        #[source]
        source: LoadError,
    },
}

impl ResolveError {
    pub fn view(&self) -> &ViewId {
        match self {
            ResolveError::LoadFailure { view, .. } => view,
        }
    }
}
