//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::views::ViewId;

/// Root configuration for the view router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Ordered route definitions; earlier entries win.
    pub routes: Vec<RouteConfig>,

    /// Path comparison options.
    pub matching: MatchingConfig,

    /// View loading settings.
    pub views: ViewsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    /// The application's declared route surface.
    fn default() -> Self {
        Self {
            routes: vec![
                RouteConfig::new("/dashboard", "Dashboard").with_alias("/"),
                RouteConfig::new("/manager-product", "ManagerProduct"),
                RouteConfig::new("/manager-user", "ManagerUser"),
                RouteConfig::new("/:pathMatch(.*)*", "NotFound"),
            ],
            matching: MatchingConfig::default(),
            views: ViewsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single route: pattern, aliases and the view it lazily loads.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics (defaults to the view id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Literal path, `:param` segments, or `/:name(.*)*` catch-all.
    pub pattern: String,

    /// Additional literal paths resolving to the same view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// View loaded when this route matches.
    pub view: ViewId,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            name: None,
            pattern: pattern.into(),
            aliases: Vec::new(),
            view: view.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name used in logs: explicit name, else the view id.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.view.to_string())
    }
}

/// Path comparison options.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Compare static segments case-sensitively.
    pub case_sensitive: bool,

    /// Treat `/a/` and `/a` as different paths.
    pub strict: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict: true,
        }
    }
}

/// Where view modules come from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewSource {
    /// Built-in placeholder modules.
    #[default]
    Static,
    /// `<dir>/<View>.<extension>` on disk.
    Dir,
    /// `<base_url>/<View>.<extension>` over HTTP.
    Http,
}

/// View loading configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub source: ViewSource,

    /// Directory for `source = "dir"`.
    pub dir: String,

    /// Base URL for `source = "http"`.
    pub base_url: String,

    /// Module file extension.
    pub extension: String,

    /// Deadline for a single view load in milliseconds (0 = none).
    pub load_timeout_ms: u64,

    /// View used when no route matches.
    pub fallback: ViewId,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            source: ViewSource::Static,
            dir: "views".to_string(),
            base_url: "http://localhost:5173/views/".to_string(),
            extension: "html".to_string(),
            load_timeout_ms: 10_000,
            fallback: ViewId::new("NotFound"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
