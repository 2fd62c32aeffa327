//! Route table and lookup.
//!
//! # Responsibilities
//! - Compile route configs into ordered definitions
//! - Reject colliding paths and misplaced catch-alls at construction
//! - Look up the first definition matching a path
//! - Return the match or an explicit `NoMatch`
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc`, no locks)
//! - O(n) scan in insertion order; first match wins
//! - Within a definition the pattern is tried before its aliases

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{MatchingConfig, RouteConfig};
use crate::routing::error::{NoMatch, RouteError};
use crate::routing::matcher::Params;
use crate::routing::pattern::PathPattern;
use crate::views::ViewId;

/// A compiled route definition.
#[derive(Debug)]
pub struct RouteDefinition {
    pub name: String,
    pub view: ViewId,
    pub pattern: PathPattern,
    pub aliases: Vec<PathPattern>,
}

impl RouteDefinition {
    /// Compile one route config.
    pub fn compile(config: &RouteConfig, options: MatchingConfig) -> Result<Self, RouteError> {
        let pattern = PathPattern::parse(&config.pattern, options)?;

        let aliases = config
            .aliases
            .iter()
            .map(|alias| {
                let compiled = PathPattern::parse(alias, options)?;
                if !compiled.is_literal() {
                    return Err(RouteError::InvalidPattern {
                        pattern: alias.clone(),
                        reason: "aliases must be literal paths".to_string(),
                    });
                }
                Ok(compiled)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: config.display_name(),
            view: config.view.clone(),
            pattern,
            aliases,
        })
    }

    /// Test the pattern, then each alias in order.
    fn matches(&self, path: &str) -> Option<(MatchedBy, Params)> {
        if let Some(params) = self.pattern.matches(path) {
            return Some((MatchedBy::Pattern, params));
        }
        self.aliases
            .iter()
            .position(|alias| alias.matches(path).is_some())
            .map(|i| (MatchedBy::Alias(i), Params::new()))
    }
}

/// How a path was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedBy {
    Pattern,
    /// Index into the definition's alias list.
    Alias(usize),
    /// No definition matched; the fallback view was used.
    Fallback,
}

impl MatchedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedBy::Pattern => "pattern",
            MatchedBy::Alias(_) => "alias",
            MatchedBy::Fallback => "fallback",
        }
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub path: String,
    /// Position in the table; `None` for the fallback.
    pub route: Option<usize>,
    pub name: String,
    pub view: ViewId,
    pub matched_by: MatchedBy,
    pub params: Params,
}

impl RouteMatch {
    /// Match synthesized when nothing in the table matched.
    pub fn fallback(path: &str, view: ViewId) -> Self {
        Self {
            path: path.to_string(),
            route: None,
            name: view.to_string(),
            view,
            matched_by: MatchedBy::Fallback,
            params: Params::new(),
        }
    }
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    catch_all: Option<usize>,
    options: MatchingConfig,
}

impl RouteTable {
    /// Compile and check a table from route configs.
    pub fn from_config(configs: &[RouteConfig], options: MatchingConfig) -> Result<Self, RouteError> {
        let routes = configs
            .iter()
            .map(|c| RouteDefinition::compile(c, options))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(routes, options)
    }

    /// Build a table from compiled definitions.
    pub fn new(routes: Vec<RouteDefinition>, options: MatchingConfig) -> Result<Self, RouteError> {
        let mut catch_all: Option<usize> = None;
        // key -> declaring route name
        let mut seen: HashMap<String, String> = HashMap::new();

        for (position, route) in routes.iter().enumerate() {
            if route.pattern.is_catch_all() {
                if let Some(first) = catch_all {
                    return Err(RouteError::MultipleCatchAll {
                        first: routes[first].pattern.to_string(),
                        second: route.pattern.to_string(),
                    });
                }
                catch_all = Some(position);
            }

            for pattern in std::iter::once(&route.pattern).chain(route.aliases.iter()) {
                if let Some(first) = seen.insert(pattern.key().to_string(), route.name.clone()) {
                    return Err(RouteError::DuplicatePath {
                        path: pattern.to_string(),
                        first,
                        second: route.name.clone(),
                    });
                }
            }
        }

        match catch_all {
            Some(position) if position + 1 != routes.len() => {
                return Err(RouteError::CatchAllNotLast {
                    pattern: routes[position].pattern.to_string(),
                    position,
                });
            }
            None => tracing::warn!(
                routes = routes.len(),
                "Route table has no catch-all; unmatched paths use the fallback view"
            ),
            _ => {}
        }

        tracing::debug!(routes = routes.len(), "Route table compiled");

        Ok(Self {
            routes,
            catch_all,
            options,
        })
    }

    /// Find the first definition matching `path`.
    pub fn lookup(&self, path: &str) -> Result<RouteMatch, NoMatch> {
        self.routes
            .iter()
            .enumerate()
            .find_map(|(i, route)| {
                route.matches(path).map(|(matched_by, params)| RouteMatch {
                    path: path.to_string(),
                    route: Some(i),
                    name: route.name.clone(),
                    view: route.view.clone(),
                    matched_by,
                    params,
                })
            })
            .ok_or_else(|| NoMatch {
                path: path.to_string(),
            })
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn catch_all(&self) -> Option<&RouteDefinition> {
        self.catch_all.map(|i| &self.routes[i])
    }

    pub fn options(&self) -> MatchingConfig {
        self.options
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
