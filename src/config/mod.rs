//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), or RouterConfig::default()
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → lifecycle::startup builds the route table and view cache from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime route registration
//! - All fields have defaults; the default route list is the application's route surface
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::MatchingConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
pub use schema::{ViewSource, ViewsConfig};
pub use validation::{validate_config, ValidationError};
