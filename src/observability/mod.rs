//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, views, navigation produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Navigation ID flows through resolver and host log events
//! - Metrics are cheap; without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
