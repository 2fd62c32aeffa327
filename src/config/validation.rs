//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every pattern and alias compiles
//! - Detect colliding paths across patterns and aliases
//! - Require exactly one catch-all, positioned last, resolving to the fallback view
//! - Validate loader settings for the selected view source
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouterConfig, ViewSource};
use crate::routing::{PathPattern, RouteError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no routes declared")]
    NoRoutes,

    #[error("route {index}: {reason}")]
    InvalidRoute { index: usize, reason: String },

    #[error("path '{path}' declared by routes {first} and {second}")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },

    #[error("expected exactly one catch-all route, found {0}")]
    CatchAllCount(usize),

    #[error("catch-all route {index} must be the last route")]
    CatchAllNotLast { index: usize },

    #[error("catch-all route resolves to '{actual}' but the fallback view is '{expected}'")]
    FallbackMismatch { expected: String, actual: String },

    #[error("views.{field}: {reason}")]
    InvalidViews { field: &'static str, reason: String },

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut catch_alls = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.view.as_str().is_empty() {
            errors.push(ValidationError::InvalidRoute {
                index,
                reason: "view must not be empty".to_string(),
            });
        }

        match PathPattern::parse(&route.pattern, config.matching) {
            Ok(pattern) => {
                if pattern.is_catch_all() {
                    catch_alls.push(index);
                }
                check_unique(&pattern, index, &mut seen, &mut errors);
            }
            Err(e) => errors.push(invalid_route(index, e)),
        }

        for alias in &route.aliases {
            match PathPattern::parse(alias, config.matching) {
                Ok(pattern) if pattern.is_literal() => {
                    check_unique(&pattern, index, &mut seen, &mut errors)
                }
                Ok(_) => errors.push(ValidationError::InvalidRoute {
                    index,
                    reason: format!("alias '{}' must be a literal path", alias),
                }),
                Err(e) => errors.push(invalid_route(index, e)),
            }
        }
    }

    match catch_alls.as_slice() {
        [index] => {
            if index + 1 != config.routes.len() {
                errors.push(ValidationError::CatchAllNotLast { index: *index });
            }
            let view = &config.routes[*index].view;
            if *view != config.views.fallback {
                errors.push(ValidationError::FallbackMismatch {
                    expected: config.views.fallback.to_string(),
                    actual: view.to_string(),
                });
            }
        }
        other => errors.push(ValidationError::CatchAllCount(other.len())),
    }

    if config.views.fallback.as_str().is_empty() {
        errors.push(ValidationError::InvalidViews {
            field: "fallback",
            reason: "must not be empty".to_string(),
        });
    }

    match config.views.source {
        ViewSource::Static => {}
        ViewSource::Dir => {
            if config.views.dir.is_empty() {
                errors.push(ValidationError::InvalidViews {
                    field: "dir",
                    reason: "required when source = \"dir\"".to_string(),
                });
            }
        }
        ViewSource::Http => {
            if let Err(e) = url::Url::parse(&config.views.base_url) {
                errors.push(ValidationError::InvalidViews {
                    field: "base_url",
                    reason: e.to_string(),
                });
            }
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique(
    pattern: &PathPattern,
    index: usize,
    seen: &mut HashMap<String, usize>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(first) = seen.insert(pattern.key().to_string(), index) {
        errors.push(ValidationError::DuplicatePath {
            path: pattern.to_string(),
            first,
            second: index,
        });
    }
}

fn invalid_route(index: usize, error: RouteError) -> ValidationError {
    ValidationError::InvalidRoute {
        index,
        reason: error.to_string(),
    }
}
