//! View identifiers, loaded units and load errors.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of an independently loadable view (e.g. `Dashboard`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded, renderable view module.
///
/// The router never looks inside `source`; it only hands the unit to the host.
#[derive(Debug)]
pub struct ViewUnit {
    pub id: ViewId,
    pub source: String,
    pub loaded_at: Instant,
}

impl ViewUnit {
    pub fn new(id: ViewId, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
            loaded_at: Instant::now(),
        }
    }
}

/// Shared reference to a loaded [`ViewUnit`].
///
/// Two handles are the same unit when they point at the same allocation,
/// which is what the lazy cache guarantees for repeated resolutions.
#[derive(Debug, Clone)]
pub struct ViewHandle(Arc<ViewUnit>);

impl ViewHandle {
    pub fn new(unit: ViewUnit) -> Self {
        Self(Arc::new(unit))
    }

    pub fn id(&self) -> &ViewId {
        &self.0.id
    }

    /// Pointer identity, not structural equality.
    pub fn same_unit(&self, other: &ViewHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ViewHandle {
    type Target = ViewUnit;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Errors raised while fetching a view module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The loader has no module for this view.
    #[error("view module '{0}' not found")]
    NotFound(ViewId),

    #[error("I/O error loading view: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error loading view: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote returned a non-success status.
    #[error("view fetch returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("view load timed out after {0} ms")]
    Timeout(u64),

    /// Generic rejection from a custom loader.
    #[error("view load rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_identity() {
        let a = ViewHandle::new(ViewUnit::new("Dashboard".into(), "<div/>"));
        let b = a.clone();
        let c = ViewHandle::new(ViewUnit::new("Dashboard".into(), "<div/>"));

        assert!(a.same_unit(&b));
        assert!(!a.same_unit(&c));
        assert_eq!(a.id(), c.id());
    }

    #[test]
    fn test_view_id_serde_transparent() {
        let id: ViewId = serde_json::from_str("\"ManagerUser\"").unwrap();
        assert_eq!(id.as_str(), "ManagerUser");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ManagerUser\"");
    }
}
