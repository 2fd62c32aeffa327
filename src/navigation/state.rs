//! Navigation state and tickets.
//!
//! # Responsibilities
//! - Hold the currently requested path
//! - Stamp every navigation with a monotonically increasing generation
//! - Tell a finished resolution whether it is still the latest navigation
//!
//! # Design Decisions
//! - Path and generation are published together as one snapshot; readers never block
//! - Staleness is advisory: a stale ticket's result is dropped, its load is not aborted

use std::sync::Arc;

use arc_swap::ArcSwap;
use uuid::Uuid;

/// Token for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    /// Unique ID for log correlation.
    pub id: Uuid,
    pub generation: u64,
    pub path: String,
}

/// The latest navigation as seen by readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentNavigation {
    pub generation: u64,
    pub path: String,
}

/// The mount host's view of where the user currently is.
#[derive(Debug)]
pub struct NavigationState {
    current: ArcSwap<CurrentNavigation>,
}

impl NavigationState {
    /// Create state from the initial location, at generation 0.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current: ArcSwap::from_pointee(CurrentNavigation {
                generation: 0,
                path: initial_path.into(),
            }),
        }
    }

    /// Record a new navigation to `path` and return its ticket.
    pub fn begin(&self, path: impl Into<String>) -> NavigationTicket {
        let path = path.into();
        let previous = self.current.rcu(|current| CurrentNavigation {
            generation: current.generation + 1,
            path: path.clone(),
        });

        NavigationTicket {
            id: Uuid::new_v4(),
            generation: previous.generation + 1,
            path,
        }
    }

    /// Whether `ticket` belongs to the latest navigation.
    pub fn is_current(&self, ticket: &NavigationTicket) -> bool {
        self.current.load().generation == ticket.generation
    }

    /// Path and generation of the latest navigation, read together.
    pub fn snapshot(&self) -> Arc<CurrentNavigation> {
        self.current.load_full()
    }

    pub fn current_path(&self) -> String {
        self.current.load().path.clone()
    }

    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }
}
