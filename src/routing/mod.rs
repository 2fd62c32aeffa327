//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (normalized path)
//!     → resolver.rs (resolve)
//!     → router.rs (route lookup, insertion order)
//!     → pattern.rs / matcher.rs (evaluate pattern, then aliases)
//!     → Return: RouteMatch, or NoMatch → fallback view
//!     → views::ViewCache (lazy load, cached)
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Compile patterns and aliases
//!     → Check collisions and catch-all placement
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (literal, segment and tail matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by declaration)

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod resolver;
pub mod router;

pub use error::{NoMatch, ResolveError, RouteError};
pub use matcher::{ParamValue, Params};
pub use pattern::{PathPattern, PatternKind};
pub use resolver::{Resolved, Resolver};
pub use router::{MatchedBy, RouteDefinition, RouteMatch, RouteTable};
