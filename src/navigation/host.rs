//! Mount host.
//!
//! # Responsibilities
//! - Own navigation state and session history
//! - Normalize requested locations before resolution
//! - Mount the resolved view only if its navigation is still the latest
//!
//! # Design Decisions
//! - Last navigation wins: stale results are discarded, loads are not aborted
//! - The mounted view never moves to an older generation
//! - Load failures of the latest navigation are returned, never swallowed

use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwapOption;
use serde::Serialize;
use tracing::Instrument;

use crate::navigation::history::MemoryHistory;
use crate::navigation::path::normalize_path;
use crate::navigation::state::{NavigationState, NavigationTicket};
use crate::navigation::NavigationError;
use crate::observability::metrics;
use crate::routing::{RouteMatch, Resolver};
use crate::views::ViewHandle;

/// A view currently rendered by the host.
#[derive(Debug, Clone)]
pub struct Mounted {
    pub ticket: NavigationTicket,
    pub route: RouteMatch,
    pub view: ViewHandle,
}

/// Result of one navigation.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    /// The resolved view is now mounted.
    Mounted(Arc<Mounted>),
    /// A newer navigation started before this one settled; its result was dropped.
    Superseded {
        ticket: NavigationTicket,
        current_path: String,
    },
}

impl NavigationOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, NavigationOutcome::Mounted(_))
    }
}

/// Serializable summary of the mounted view.
#[derive(Debug, Clone, Serialize)]
pub struct MountedSummary {
    pub path: String,
    pub route: String,
    pub view: String,
    pub generation: u64,
    pub params: crate::routing::Params,
}

impl From<&Mounted> for MountedSummary {
    fn from(m: &Mounted) -> Self {
        Self {
            path: m.ticket.path.clone(),
            route: m.route.name.clone(),
            view: m.view.id().to_string(),
            generation: m.ticket.generation,
            params: m.route.params.clone(),
        }
    }
}

/// Drives navigation: owns state and history, resolves, mounts.
#[derive(Debug)]
pub struct MountHost {
    resolver: Resolver,
    state: NavigationState,
    history: Mutex<MemoryHistory>,
    mounted: ArcSwapOption<Mounted>,
}

impl MountHost {
    /// Create a host positioned at `initial_location`. Nothing is mounted until [`start`](Self::start).
    pub fn new(resolver: Resolver, initial_location: &str) -> Result<Self, NavigationError> {
        let initial = normalize_path(initial_location)?;
        Ok(Self {
            resolver,
            state: NavigationState::new(initial.clone()),
            history: Mutex::new(MemoryHistory::new(initial)),
            mounted: ArcSwapOption::const_empty(),
        })
    }

    /// Resolve and mount the initial location.
    pub async fn start(&self) -> Result<NavigationOutcome, NavigationError> {
        let ticket = {
            let history = self.history();
            self.state.begin(history.location())
        };
        self.complete(ticket).await
    }

    /// Navigate to `location`, adding a history entry.
    pub async fn navigate(&self, location: &str) -> Result<NavigationOutcome, NavigationError> {
        let ticket = self.begin_navigation(location)?;
        self.complete(ticket).await
    }

    /// Issue the ticket for a navigation to `location` and push it onto history.
    ///
    /// Tickets are ordered by this call, not by when [`complete`](Self::complete)
    /// runs, so callers that settle navigations concurrently should begin them
    /// in the order they were requested.
    pub fn begin_navigation(&self, location: &str) -> Result<NavigationTicket, NavigationError> {
        let path = normalize_path(location)?;
        let mut history = self.history();
        history.push(path.clone());
        Ok(self.state.begin(path))
    }

    /// Navigate to `location`, replacing the current history entry.
    pub async fn replace(&self, location: &str) -> Result<NavigationOutcome, NavigationError> {
        let path = normalize_path(location)?;
        let ticket = {
            let mut history = self.history();
            history.replace(path.clone());
            self.state.begin(path)
        };
        self.complete(ticket).await
    }

    /// Go one entry back. Returns `None` at the start of history.
    pub async fn back(&self) -> Result<Option<NavigationOutcome>, NavigationError> {
        let ticket = {
            let mut history = self.history();
            history.back().map(|path| self.state.begin(path))
        };
        match ticket {
            Some(ticket) => self.complete(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Go one entry forward. Returns `None` at the end of history.
    pub async fn forward(&self) -> Result<Option<NavigationOutcome>, NavigationError> {
        let ticket = {
            let mut history = self.history();
            history.forward().map(|path| self.state.begin(path))
        };
        match ticket {
            Some(ticket) => self.complete(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the navigation behind `ticket` and mount it if it is still the latest.
    pub async fn complete(&self, ticket: NavigationTicket) -> Result<NavigationOutcome, NavigationError> {
        let span = tracing::info_span!(
            "navigation",
            id = %ticket.id,
            generation = ticket.generation,
            path = %ticket.path
        );

        self.settle(ticket).instrument(span).await
    }

    /// The currently mounted view, if any.
    pub fn mounted(&self) -> Option<Arc<Mounted>> {
        self.mounted.load_full()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn location(&self) -> String {
        self.history().location().to_string()
    }

    // History moves and ticket issue happen under this lock so both follow one order.
    fn history(&self) -> MutexGuard<'_, MemoryHistory> {
        // History holds plain data; a poisoned lock still has a usable value.
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn settle(&self, ticket: NavigationTicket) -> Result<NavigationOutcome, NavigationError> {
        let result = self.resolver.resolve_match(&ticket.path).await;

        if !self.state.is_current(&ticket) {
            return Ok(self.superseded(ticket));
        }

        let resolved = result?;
        let mounted = Arc::new(Mounted {
            ticket,
            route: resolved.route,
            view: resolved.view,
        });

        if !self.mount(&mounted) {
            return Ok(self.superseded(mounted.ticket.clone()));
        }

        tracing::info!(
            route = %mounted.route.name,
            view = %mounted.view.id(),
            "View mounted"
        );
        Ok(NavigationOutcome::Mounted(mounted))
    }

    /// Store `mounted` unless a newer generation is already mounted.
    /// Returns whether `mounted` is now the mounted view.
    fn mount(&self, mounted: &Arc<Mounted>) -> bool {
        let generation = mounted.ticket.generation;
        let previous = self.mounted.rcu(|current| match current {
            Some(existing) if existing.ticket.generation > generation => Some(existing.clone()),
            _ => Some(mounted.clone()),
        });

        !matches!(previous, Some(existing) if existing.ticket.generation > generation)
    }

    fn superseded(&self, ticket: NavigationTicket) -> NavigationOutcome {
        metrics::record_superseded();
        let current_path = self.state.current_path();
        tracing::debug!(current = %current_path, "Navigation superseded, discarding result");
        NavigationOutcome::Superseded {
            ticket,
            current_path,
        }
    }
}
